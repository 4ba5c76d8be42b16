use super::{Site, SiteSetError};

/// Maximum number of sites. Fixed by the length of the uniform arrays in
/// `voronoi.wgsl`; changing one requires changing the other.
pub const MAX_SITES: usize = 4;

/// Ordered list of up to [`MAX_SITES`] sites.
///
/// Storage is inline; slots at and beyond `len` are kept at their default value
/// so packing them into a uniform never leaks stale data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSet {
    slots: [Site; MAX_SITES],
    len: usize,
}

impl SiteSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a slice, failing if it holds more than [`MAX_SITES`]
    /// or any site is non-finite.
    pub fn from_slice(sites: &[Site]) -> Result<Self, SiteSetError> {
        if sites.len() > MAX_SITES {
            return Err(SiteSetError::CapacityExceeded {
                capacity: MAX_SITES,
                attempted: sites.len(),
            });
        }
        if let Some(index) = sites.iter().position(|s| !s.is_finite()) {
            return Err(SiteSetError::NonFinite { index });
        }

        let mut set = Self::new();
        set.slots[..sites.len()].copy_from_slice(sites);
        set.len = sites.len();
        Ok(set)
    }

    /// Appends a site. The new site has the highest index, so it loses ties.
    pub fn push(&mut self, site: Site) -> Result<(), SiteSetError> {
        if self.len == MAX_SITES {
            return Err(SiteSetError::CapacityExceeded {
                capacity: MAX_SITES,
                attempted: MAX_SITES + 1,
            });
        }
        if !site.is_finite() {
            return Err(SiteSetError::NonFinite { index: self.len });
        }
        self.slots[self.len] = site;
        self.len += 1;
        Ok(())
    }

    /// Removes every site and resets the slots.
    pub fn clear(&mut self) {
        self.slots = [Site::default(); MAX_SITES];
        self.len = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Site] {
        &self.slots[..self.len]
    }

    /// Mutable access to the active sites, for callers animating positions
    /// or colors between frames.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Site] {
        &mut self.slots[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Site> {
        self.as_slice().get(index)
    }

    /// All slots including the inactive tail, in index order.
    #[inline]
    pub(crate) fn slots(&self) -> &[Site; MAX_SITES] {
        &self.slots
    }
}

impl<'a> IntoIterator for &'a SiteSet {
    type Item = &'a Site;
    type IntoIter = std::slice::Iter<'a, Site>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rgba;

    fn site(x: f32) -> Site {
        Site::at(x, 0.0, Rgba::opaque(x, 0.0, 0.0))
    }

    // ── push ──────────────────────────────────────────────────────────────

    #[test]
    fn push_keeps_insertion_order() {
        let mut set = SiteSet::new();
        set.push(site(0.1)).unwrap();
        set.push(site(0.2)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some(&site(0.1)));
        assert_eq!(set.get(1), Some(&site(0.2)));
    }

    #[test]
    fn push_past_capacity_fails_and_leaves_set_intact() {
        let mut set = SiteSet::new();
        for i in 0..MAX_SITES {
            set.push(site(i as f32)).unwrap();
        }
        let before = set.clone();
        let err = set.push(site(9.0)).unwrap_err();
        assert_eq!(
            err,
            SiteSetError::CapacityExceeded { capacity: MAX_SITES, attempted: MAX_SITES + 1 }
        );
        assert_eq!(set, before);
    }

    #[test]
    fn push_rejects_non_finite_site() {
        let mut set = SiteSet::from_slice(&[site(0.1)]).unwrap();
        let bad = Site::at(f32::NAN, 0.0, Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!(set.push(bad), Err(SiteSetError::NonFinite { index: 1 }));
        assert_eq!(set.len(), 1);
    }

    // ── from_slice ────────────────────────────────────────────────────────

    #[test]
    fn from_slice_accepts_up_to_capacity() {
        let sites = [site(0.0), site(1.0), site(2.0), site(3.0)];
        let set = SiteSet::from_slice(&sites).unwrap();
        assert_eq!(set.as_slice(), &sites);
    }

    #[test]
    fn from_slice_rejects_overflow() {
        let sites = [site(0.0); MAX_SITES + 1];
        assert!(matches!(
            SiteSet::from_slice(&sites),
            Err(SiteSetError::CapacityExceeded { attempted: 5, .. })
        ));
    }

    #[test]
    fn from_slice_rejects_non_finite_color() {
        let bad = Site::at(0.0, 0.0, Rgba::new(0.5, f32::INFINITY, 0.0, 1.0));
        assert_eq!(
            SiteSet::from_slice(&[site(0.2), bad]),
            Err(SiteSetError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn from_empty_slice_is_empty() {
        let set = SiteSet::from_slice(&[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    // ── inactive slots ────────────────────────────────────────────────────

    #[test]
    fn clear_resets_inactive_slots() {
        let mut set = SiteSet::from_slice(&[site(0.5), site(0.7)]).unwrap();
        set.clear();
        assert!(set.is_empty());
        assert!(set.slots().iter().all(|s| *s == Site::default()));
    }

    #[test]
    fn mutation_through_slice_is_visible() {
        let mut set = SiteSet::from_slice(&[site(0.5)]).unwrap();
        set.as_mut_slice()[0].position.y = 0.25;
        assert_eq!(set.get(0).map(|s| s.position.y), Some(0.25));
    }
}
