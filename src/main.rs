//! Headless frame driver: steps a free-fly or orbit scene and logs the
//! resulting matrices.

use std::path::PathBuf;

use camkit::mesh::{load_obj_or_cube, Mesh};
use camkit::options::Options;
use camkit::util::frame_timing::FrameTiming;
use camkit::{CamkitError, FrameOutput, Scene, SceneKind};

const USAGE: &str = "usage: camkit <free-fly|orbit> [--options FILE] [--obj FILE] \
[--frames N] [--fps N] [--hold KEY]... [--press KEY]... [--realtime]";

/// Headless stand-in for a browser animation loop.
struct DriverArgs {
    kind: SceneKind,
    options: Option<PathBuf>,
    obj: Option<PathBuf>,
    frames: u32,
    fps: u32,
    /// Keys held down for the whole run.
    hold: Vec<String>,
    /// Keys tapped once before the first frame.
    press: Vec<String>,
    /// Pace frames against the wall clock instead of synthetic timestamps.
    realtime: bool,
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<DriverArgs, CamkitError> {
    let kind = args
        .next()
        .ok_or_else(|| CamkitError::Args(USAGE.to_owned()))?
        .parse()?;
    let mut parsed = DriverArgs {
        kind,
        options: None,
        obj: None,
        frames: 120,
        fps: 60,
        hold: Vec::new(),
        press: Vec::new(),
        realtime: false,
    };

    while let Some(flag) = args.next() {
        if flag == "--realtime" {
            parsed.realtime = true;
            continue;
        }
        let value = args.next().ok_or_else(|| {
            CamkitError::Args(format!("{flag} needs a value\n{USAGE}"))
        })?;
        match flag.as_str() {
            "--options" => parsed.options = Some(value.into()),
            "--obj" => parsed.obj = Some(value.into()),
            "--frames" => parsed.frames = parse_number(&flag, &value)?,
            "--fps" => parsed.fps = parse_number(&flag, &value)?,
            "--hold" => parsed.hold.push(value),
            "--press" => parsed.press.push(value),
            _ => {
                return Err(CamkitError::Args(format!(
                    "unknown flag {flag}\n{USAGE}"
                )))
            }
        }
    }
    Ok(parsed)
}

fn parse_number(flag: &str, value: &str) -> Result<u32, CamkitError> {
    value.parse().map_err(|e| {
        CamkitError::Args(format!("{flag} expects a number, got '{value}': {e}"))
    })
}

fn run(args: &DriverArgs) -> Result<(), CamkitError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let mesh = args
        .obj
        .as_deref()
        .map_or_else(Mesh::unit_cube, load_obj_or_cube);
    log::info!(
        "mesh: {} vertices, {} triangles, {} bytes of vertex data",
        mesh.vertices.len(),
        mesh.triangle_count(),
        mesh.vertex_bytes().len()
    );

    let mut scene = Scene::new(args.kind, &options);
    for key in &args.press {
        if scene.handle_key(key, true) {
            let _ = scene.handle_key(key, false);
        } else {
            log::warn!("{key} is not bound in a {} scene", args.kind);
        }
    }
    for key in &args.hold {
        if !scene.handle_key(key, true) {
            log::warn!("{key} is not bound in a {} scene", args.kind);
        }
    }

    let last = if args.realtime {
        run_realtime(&mut scene, args)
    } else {
        run_synthetic(&mut scene, args)
    };

    if let Some(frame) = last {
        log::info!(
            "after {} frames: eye={} center={}",
            args.frames,
            frame.pose.eye,
            frame.pose.center
        );
        log::info!("view_proj = {:?}", frame.view_proj_cols());
    }
    Ok(())
}

fn run_synthetic(scene: &mut Scene, args: &DriverArgs) -> Option<FrameOutput> {
    let step = 1.0 / f64::from(args.fps.max(1));
    let mut last = None;
    for frame in 0..args.frames {
        let out = scene.render(f64::from(frame) * step);
        log::debug!("frame {frame}: eye={} dt={:.4}", out.pose.eye, out.delta_time);
        last = Some(out);
    }
    last
}

fn run_realtime(scene: &mut Scene, args: &DriverArgs) -> Option<FrameOutput> {
    let mut timing = FrameTiming::new(args.fps);
    let mut last = None;
    for frame in 0..args.frames {
        while !timing.should_render() {
            std::thread::sleep(timing.time_until_next_frame());
        }
        let out = scene.render(timing.timestamp());
        timing.end_frame();
        log::debug!(
            "frame {frame}: eye={} dt={:.4} fps={:.1}",
            out.pose.eye,
            out.delta_time,
            timing.fps()
        );
        last = Some(out);
    }
    last
}

fn main() {
    env_logger::init();

    let result = parse_args(std::env::args().skip(1)).and_then(|args| run(&args));
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
