//! One-shot generator for the RPC interface digital-twin assets.
//!
//! Builds the 8-channel WDM interface scene and writes three artifacts to
//! `generated/`: the metadata JSON, the layout preview SVG, and the phase
//! fidelity ramp SVG. The GDS-II writer in `openphotonics-io` shares the
//! scene's coordinate conventions but is not wired into this pipeline; no
//! layer/datatype assignment exists yet for the device kinds.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};

use openphotonics_core::{build_interface, FidelityRamp, LayoutParams};
use openphotonics_io::{write_metadata, InterfaceMetadata};
use openphotonics_render::{render_fidelity_ramp, render_layout_preview};

const OUTDIR: &str = "generated";

const METADATA_FILE: &str = "rpc_interface_metadata.json";
const PREVIEW_FILE: &str = "rpc_interface_preview.svg";
const RAMP_FILE: &str = "phase_fidelity_ramp.svg";

fn main() -> Result<()> {
    env_logger::init();
    run(Path::new(OUTDIR))
}

fn run(outdir: &Path) -> Result<()> {
    fs::create_dir_all(outdir)
        .with_context(|| format!("creating output directory {}", outdir.display()))?;

    let params = LayoutParams::default();
    let scene = build_interface(&params);
    log::info!("built interface scene: {} polygons", scene.polygon_count());

    write_metadata(&InterfaceMetadata::default(), outdir.join(METADATA_FILE))
        .context("writing metadata JSON")?;

    let preview = render_layout_preview(&scene);
    fs::write(outdir.join(PREVIEW_FILE), preview)
        .with_context(|| format!("writing {PREVIEW_FILE}"))?;

    let ramp = render_fidelity_ramp(&FidelityRamp::default());
    fs::write(outdir.join(RAMP_FILE), ramp).with_context(|| format!("writing {RAMP_FILE}"))?;

    let expected = params.min_polygon_count();
    ensure!(
        scene.polygon_count() >= expected,
        "Low polygon count: {} < {}",
        scene.polygon_count(),
        expected
    );

    println!("Self-test passed: {} polygons generated", scene.polygon_count());
    println!("All files generated in {}/", outdir.display());
    Ok(())
}
