use anyhow::{Context, Result};
use arshim::device::{EglApi, EglHelper, NativeEgl, OffscreenContext};
use arshim::gl::{create_external_texture, GlInfo, GlowGl};
use arshim::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        eprintln!("arshim-probe: {err:#}");
        std::process::exit(1);
    }
}

type Helper = EglHelper<NativeEgl>;

fn run() -> Result<()> {
    let egl = NativeEgl::load().context("EGL is not available on this system")?;
    let helper = EglHelper::new(egl);

    let primary = helper
        .create_context()
        .context("failed to create the primary offscreen context")?;
    println!("primary context:  {:?}", primary.handle());

    let result = exercise(&helper, &primary);
    helper.destroy_context(primary);
    log::info!("released all contexts");

    result
}

fn exercise(helper: &Helper, primary: &OffscreenContext<NativeEgl>) -> Result<()> {
    let info = GlInfo::query(|name| helper.api().proc_address(name))
        .context("failed to read GL identification strings")?;
    println!("  vendor          {}", info.vendor);
    println!("  renderer        {}", info.renderer);
    println!("  version         {}", info.version);
    println!("  glsl            {}", info.shading_language_version);

    let gl = unsafe { GlowGl::from_loader(|name| helper.api().proc_address(name)) };
    let texture = create_external_texture(&gl).context("failed to create external texture")?;
    println!("external texture: {texture}");

    let shared = helper
        .create_shared_context(primary)
        .context("failed to create a shared offscreen context")?;
    println!("shared context:   {:?}", shared.handle());

    println!(
        "current check:    primary={} shared={}",
        helper.validate_context(Some(primary.handle())),
        helper.validate_context(Some(shared.handle())),
    );

    helper.destroy_context(shared);
    Ok(())
}
