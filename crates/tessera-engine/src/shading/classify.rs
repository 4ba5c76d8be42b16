use crate::coords::{Rgba, ScreenSize, Vec2};
use crate::sites::SiteSet;

/// Squared distance under which a pixel is painted black. Marks each site's
/// location in the diagram.
pub const BOUNDARY_THRESHOLD: f32 = 5e-5;

/// Initial "minimum" distance. Any site closer than this can win.
pub const SENTINEL_DISTANCE: f32 = 1e9;

/// Result of a nearest-site search.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Nearest {
    pub index: usize,
    pub distance_squared: f32,
}

/// Maps a framebuffer pixel coordinate into site space.
///
/// `uv = pixel / screen * 2 - 1`, with the vertical axis flipped (framebuffer
/// rows grow downwards, site space grows upwards) and the horizontal axis
/// multiplied by `width / height`.
#[inline]
pub fn normalize_pixel(pixel: Vec2, screen: ScreenSize) -> Vec2 {
    let [w, h] = screen.to_array();
    let x = pixel.x / w * 2.0 - 1.0;
    let y = pixel.y / h * 2.0 - 1.0;
    Vec2::new(x * (w / h), -y)
}

/// Index and squared distance of the site closest to `point`.
///
/// Sites are scanned in index order with a strict `<`, so the lowest index
/// wins ties. Returns `None` for an empty set.
pub fn nearest_site(point: Vec2, sites: &SiteSet) -> Option<Nearest> {
    let mut best: Option<Nearest> = None;
    let mut min_dist = SENTINEL_DISTANCE;

    for (index, site) in sites.iter().enumerate() {
        let d = (site.position - point).length_squared();
        if d < min_dist {
            min_dist = d;
            best = Some(Nearest { index, distance_squared: d });
        }
    }

    best
}

/// Color the fragment stage produces for `pixel`.
///
/// `background` is returned when no site can be selected (empty set, or every
/// site at or beyond [`SENTINEL_DISTANCE`]).
pub fn shade_pixel(pixel: Vec2, screen: ScreenSize, sites: &SiteSet, background: Rgba) -> Rgba {
    let uv = normalize_pixel(pixel, screen);

    match nearest_site(uv, sites) {
        None => background,
        Some(n) if n.distance_squared < BOUNDARY_THRESHOLD => Rgba::black(),
        Some(n) => sites.get(n.index).map_or(background, |s| s.color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::Site;

    const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);
    const BLUE: Rgba = Rgba::opaque(0.0, 0.0, 1.0);
    const GREY: Rgba = Rgba::opaque(0.2, 0.2, 0.2);

    fn set(sites: &[Site]) -> SiteSet {
        SiteSet::from_slice(sites).unwrap()
    }

    fn px(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── normalize_pixel ───────────────────────────────────────────────────

    #[test]
    fn normalize_maps_center_to_origin() {
        assert_eq!(normalize_pixel(px(50.0, 50.0), ScreenSize::new(100, 100)), Vec2::zero());
        assert_eq!(normalize_pixel(px(100.0, 50.0), ScreenSize::new(200, 100)), Vec2::zero());
    }

    #[test]
    fn normalize_flips_vertical_axis() {
        let screen = ScreenSize::new(100, 100);
        assert_eq!(normalize_pixel(px(50.0, 0.0), screen), Vec2::new(0.0, 1.0));
        assert_eq!(normalize_pixel(px(50.0, 100.0), screen), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn normalize_scales_horizontal_axis_only() {
        let uv = normalize_pixel(px(200.0, 0.0), ScreenSize::new(200, 100));
        assert_eq!(uv, Vec2::new(2.0, 1.0));
    }

    // ── nearest_site ──────────────────────────────────────────────────────

    #[test]
    fn nearest_of_empty_set_is_none() {
        assert_eq!(nearest_site(Vec2::zero(), &SiteSet::new()), None);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let sites = set(&[Site::at(-0.5, 0.0, RED), Site::at(0.5, 0.0, BLUE)]);
        let n = nearest_site(Vec2::zero(), &sites).unwrap();
        assert_eq!(n.index, 0);
        assert_eq!(n.distance_squared, 0.25);
    }

    #[test]
    fn coincident_sites_resolve_to_first() {
        let sites = set(&[
            Site::at(0.3, 0.3, BLUE),
            Site::at(0.3, 0.3, RED),
            Site::at(0.3, 0.3, GREY),
        ]);
        assert_eq!(nearest_site(Vec2::new(-0.9, 0.1), &sites).map(|n| n.index), Some(0));
    }

    #[test]
    fn sites_beyond_sentinel_are_unreachable() {
        let sites = set(&[Site::at(1e5, 0.0, RED)]);
        assert_eq!(nearest_site(Vec2::zero(), &sites), None);
    }

    #[test]
    fn nearest_matches_brute_force_argmin() {
        let sites = set(&[
            Site::at(-0.5, -0.5, RED),
            Site::at(0.75, -0.5, BLUE),
            Site::at(0.5, 0.25, GREY),
            Site::at(0.75, 0.5, Rgba::opaque(0.7, 0.5, 1.0)),
        ]);

        for iy in -20..=20 {
            for ix in -30..=30 {
                let p = Vec2::new(ix as f32 / 10.0, iy as f32 / 20.0);
                let n = nearest_site(p, &sites).unwrap();

                let dists: Vec<f32> =
                    sites.iter().map(|s| (s.position - p).length_squared()).collect();
                let min = dists.iter().copied().fold(f32::INFINITY, f32::min);
                let first_min = dists.iter().position(|&d| d == min).unwrap();

                assert_eq!(n.index, first_min, "point {p:?}");
                assert_eq!(n.distance_squared, min);
            }
        }
    }

    // ── shade_pixel ───────────────────────────────────────────────────────

    #[test]
    fn empty_set_shades_background() {
        let c = shade_pixel(px(10.0, 10.0), ScreenSize::new(64, 64), &SiteSet::new(), GREY);
        assert_eq!(c, GREY);
    }

    #[test]
    fn boundary_threshold_is_strict() {
        let screen = ScreenSize::new(100, 100);
        // uv.x = 0.02, distance² to the origin = 4e-4: outside the threshold.
        let sites = set(&[Site::at(0.0, 0.0, RED)]);
        assert_eq!(shade_pixel(px(51.0, 50.0), screen, &sites, GREY), RED);

        // Site placed so that the pixel center sits well inside the threshold.
        let sites = set(&[Site::at(0.005, 0.0, RED)]);
        assert_eq!(shade_pixel(px(50.0, 50.0), screen, &sites, GREY), Rgba::black());
    }

    #[test]
    fn boundary_applies_to_whichever_site_is_nearest() {
        let screen = ScreenSize::new(100, 100);
        let sites = set(&[Site::at(-0.5, 0.0, RED), Site::at(0.5, 0.0, BLUE)]);
        assert_eq!(shade_pixel(px(25.0, 50.0), screen, &sites, GREY), Rgba::black());
        assert_eq!(shade_pixel(px(75.0, 50.0), screen, &sites, GREY), Rgba::black());
    }

    #[test]
    fn shading_is_deterministic() {
        let screen = ScreenSize::new(317, 211);
        let sites = set(&[Site::at(-0.2, 0.1, RED), Site::at(0.4, -0.3, BLUE)]);
        for i in 0..100 {
            let p = px(i as f32 * 3.1, i as f32 * 2.07);
            assert_eq!(
                shade_pixel(p, screen, &sites, GREY),
                shade_pixel(p, screen, &sites, GREY)
            );
        }
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn single_site_paints_everything_but_its_center() {
        let screen = ScreenSize::new(64, 64);
        let sites = set(&[Site::at(0.0, 0.0, RED)]);

        // Pixel centers never land on the origin; the closest four sit at
        // distance² 2 * (1/64)² = 4.9e-4, above the threshold.
        for y in 0..64 {
            for x in 0..64 {
                let p = px(x as f32 + 0.5, y as f32 + 0.5);
                assert_eq!(shade_pixel(p, screen, &sites, GREY), RED, "pixel ({x}, {y})");
            }
        }

        // Exactly on the site.
        assert_eq!(shade_pixel(px(32.0, 32.0), screen, &sites, GREY), Rgba::black());
    }

    #[test]
    fn two_sites_split_the_screen_at_the_midline() {
        let screen = ScreenSize::new(100, 100);
        let sites = set(&[Site::at(-0.5, 0.0, RED), Site::at(0.5, 0.0, BLUE)]);

        for y in [0.5, 20.5, 50.5, 99.5] {
            assert_eq!(shade_pixel(px(10.5, y), screen, &sites, GREY), RED);
            assert_eq!(shade_pixel(px(49.5, y), screen, &sites, GREY), RED);
            assert_eq!(shade_pixel(px(50.5, y), screen, &sites, GREY), BLUE);
            assert_eq!(shade_pixel(px(90.5, y), screen, &sites, GREY), BLUE);
        }

        // Exact midline ties, and the tie goes to index 0.
        assert_eq!(shade_pixel(px(50.0, 10.0), screen, &sites, GREY), RED);
    }

    #[test]
    fn aspect_correction_halves_horizontal_offset_on_wide_screen() {
        let sites = set(&[Site::at(0.5, 0.0, RED), Site::at(-0.5, 0.0, BLUE)]);

        let square = ScreenSize::new(100, 100);
        let wide = ScreenSize::new(200, 100);

        // Square: the site sits half way between center and right edge.
        assert_eq!(shade_pixel(px(75.0, 50.0), square, &sites, GREY), Rgba::black());
        // Wide: the site sits a quarter of the way, 25px of a 100px half-width.
        assert_eq!(shade_pixel(px(125.0, 50.0), wide, &sites, GREY), Rgba::black());
        // The square-screen position is no longer on the site.
        assert_eq!(shade_pixel(px(150.0, 50.0), wide, &sites, GREY), RED);

        // Vertical placement is unaffected by the aspect ratio.
        let sites = set(&[Site::at(0.0, 0.5, RED)]);
        assert_eq!(shade_pixel(px(50.0, 25.0), square, &sites, GREY), Rgba::black());
        assert_eq!(shade_pixel(px(100.0, 25.0), wide, &sites, GREY), Rgba::black());
    }

    #[test]
    fn resize_between_frames_reclassifies_without_stale_state() {
        let sites = set(&[Site::at(0.0, 0.0, RED), Site::at(1.0, 0.0, BLUE)]);
        let p = px(80.0, 50.0);

        let square = ScreenSize::new(100, 100);
        let tall = ScreenSize::new(100, 200);

        // uv = (0.6, 0): closer to the blue site.
        assert_eq!(shade_pixel(p, square, &sites, GREY), BLUE);
        // uv = (0.3, 0.5): closer to the red site.
        assert_eq!(shade_pixel(p, tall, &sites, GREY), RED);
        // Going back to the first size restores the first answer.
        assert_eq!(shade_pixel(p, square, &sites, GREY), BLUE);
    }
}
