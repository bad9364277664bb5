mod column_intervals;
mod probe_scoping;
mod voxel_indexing;
