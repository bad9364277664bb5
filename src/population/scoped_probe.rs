use crate::math::{Isometry, Real, Vector};
use crate::population::CollisionBackend;

/// A probe bound to the scope of one bulk grid operation.
///
/// The probe is destroyed when this guard is dropped, whichever way the enclosing
/// operation exits. Use [`ScopedProbe::release`] to observe a failure to destroy it.
pub struct ScopedProbe<'a, B: CollisionBackend + ?Sized> {
    backend: &'a mut B,
    probe: Option<B::Probe>,
}

impl<'a, B: CollisionBackend + ?Sized> ScopedProbe<'a, B> {
    /// Creates a probe of the given full dimensions on `backend`.
    pub fn acquire(backend: &'a mut B, dimensions: Vector<Real>) -> Result<Self, B::Error> {
        let probe = backend.create_probe(dimensions)?;
        Ok(Self {
            backend,
            probe: Some(probe),
        })
    }

    /// The backend this probe lives in.
    #[inline]
    pub fn backend(&self) -> &B {
        &*self.backend
    }

    /// Moves the probe to the given world-space pose.
    pub fn place(&mut self, pose: &Isometry<Real>) -> Result<(), B::Error> {
        match &self.probe {
            Some(probe) => self.backend.place_probe(probe, pose),
            None => Ok(()),
        }
    }

    /// Is the given body part closer than `threshold` to the probe?
    pub fn overlaps(&self, body: B::Body, link: B::Link, threshold: Real) -> Result<bool, B::Error> {
        match &self.probe {
            Some(probe) => self.backend.overlaps(body, link, probe, threshold),
            None => Ok(false),
        }
    }

    /// Destroys the probe now, returning the backend's error if that fails.
    pub fn release(mut self) -> Result<(), B::Error> {
        match self.probe.take() {
            Some(probe) => self.backend.destroy_probe(probe),
            None => Ok(()),
        }
    }
}

impl<B: CollisionBackend + ?Sized> Drop for ScopedProbe<'_, B> {
    fn drop(&mut self) {
        if let Some(probe) = self.probe.take() {
            if let Err(e) = self.backend.destroy_probe(probe) {
                log::warn!("failed to destroy a voxel probe: {e}");
            }
        }
    }
}
