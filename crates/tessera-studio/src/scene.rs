use tessera_engine::coords::Rgba;
use tessera_engine::sites::{Site, SiteSet, SiteSetError};

/// Clear color, also shown when the site set is empty.
pub const BACKGROUND: Rgba = Rgba::opaque(0.2, 0.2, 0.2);

/// The four fixed demo sites, in tie-break order.
pub const DEMO_SITES: [Site; 4] = [
    Site::at(-0.5, -0.5, Rgba::opaque(0.9, 0.9, 0.5)),
    Site::at(0.75, -0.5, Rgba::opaque(0.7, 0.9, 0.2)),
    Site::at(0.5, 0.25, Rgba::opaque(0.4, 0.9, 0.9)),
    Site::at(0.75, 0.5, Rgba::opaque(0.7, 0.5, 1.0)),
];

pub fn demo_sites() -> Result<SiteSet, SiteSetError> {
    SiteSet::from_slice(&DEMO_SITES)
}
