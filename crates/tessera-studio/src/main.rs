mod scene;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use tessera_engine::core::{App, AppControl, FrameCtx};
use tessera_engine::device::GpuInit;
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::render::VoronoiRenderer;
use tessera_engine::sites::SiteSet;
use tessera_engine::window::{Runtime, RuntimeConfig};

use scene::BACKGROUND;

/// Redraws the Voronoi diagram of a fixed site set every frame.
struct VoronoiApp {
    renderer: VoronoiRenderer,
    sites: SiteSet,
}

impl App for VoronoiApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.frame_index == 0 {
            let screen = ctx.screen();
            log::info!(
                "first frame: {}x{} px, {} sites",
                screen.width,
                screen.height,
                self.sites.len()
            );
        }

        let (renderer, sites) = (&mut self.renderer, &self.sites);
        ctx.render(BACKGROUND, |rctx, target| {
            renderer.render(rctx, target, sites, BACKGROUND)?;
            Ok(())
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = VoronoiApp {
        renderer: VoronoiRenderer::new(),
        sites: scene::demo_sites().context("demo site set is invalid")?,
    };

    let config = RuntimeConfig {
        title: "Tessera".to_string(),
        initial_size: LogicalSize::new(960.0, 640.0),
    };

    Runtime::run(config, GpuInit::default(), app)
        .context("unable to run the Voronoi renderer; your GPU or driver may not support it")
}
