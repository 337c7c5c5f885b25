use anyhow::Context;
use liquid_core::{FieldConfig, FieldDriver, SurfaceSize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

mod grid;

use grid::GridSurface;

const CELL_PX: f32 = 10.0;
const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_FRAMES: u64 = 180;
const DEFAULT_COLS: u32 = 80;
const DEFAULT_ROWS: u32 = 40;

const USAGE: &str = "usage: liquid-native [frames] [width] [height] [--fast]
  frames  frames to simulate (default 180)
  width   grid columns (default 80)
  height  grid rows (default 40)
  --fast  skip the 60 Hz pacing sleep between frames";

#[derive(Debug, PartialEq)]
struct Args {
    frames: u64,
    cols: u32,
    rows: u32,
    fast: bool,
}

fn parse_args<I>(args: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut fast = false;
    let mut positional = Vec::new();
    for arg in args {
        if arg == "--fast" {
            fast = true;
        } else {
            positional.push(arg);
        }
    }
    if positional.len() > 3 {
        anyhow::bail!("unexpected argument: {:?}", positional[3]);
    }
    Ok(Args {
        frames: positional_or(&positional, 0, "frame count", DEFAULT_FRAMES)?,
        cols: positional_or(&positional, 1, "width", DEFAULT_COLS)?,
        rows: positional_or(&positional, 2, "height", DEFAULT_ROWS)?,
        fast,
    })
}

fn positional_or<T>(positional: &[String], idx: usize, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match positional.get(idx) {
        Some(s) => s
            .parse::<T>()
            .with_context(|| format!("invalid {name}: {s:?}")),
        None => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1)).context(USAGE)?;
    let size = SurfaceSize::new(
        args.cols as f32 * CELL_PX,
        args.rows as f32 * CELL_PX,
        1.0,
    );
    // the grid stands in for the viewport when picking the particle count
    let config = FieldConfig::for_viewport(size.width as f64);

    let mut driver = FieldDriver::new(GridSurface::new(CELL_PX));
    driver.start(size, config, StdRng::from_entropy())?;

    let epoch_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before 1970")?
        .as_secs_f64()
        * 1000.0;
    let period = Duration::from_secs_f64(FRAME_MS / 1000.0);
    let mut next = Instant::now();

    // fixed-rate stand-in for the browser's repaint scheduler
    for i in 0..args.frames {
        if !driver.frame(epoch_ms + i as f64 * FRAME_MS) {
            break;
        }
        if !args.fast {
            next += period;
            let now = Instant::now();
            if next > now {
                thread::sleep(next - now);
            }
        }
    }
    driver.stop();

    if let Some(field) = driver.field() {
        log::info!(
            "frames={} particles={} settled={} recycled_total={}",
            driver.frames(),
            field.len(),
            field.settled_count(),
            field.recycled_total()
        );
    }
    print!("{}", driver.surface().render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_when_no_arguments() {
        assert_eq!(
            args(&[]).unwrap(),
            Args {
                frames: DEFAULT_FRAMES,
                cols: DEFAULT_COLS,
                rows: DEFAULT_ROWS,
                fast: false,
            }
        );
    }

    #[test]
    fn fast_flag_may_appear_anywhere() {
        let parsed = args(&["30", "--fast", "120", "20"]).unwrap();
        assert_eq!((parsed.frames, parsed.cols, parsed.rows), (30, 120, 20));
        assert!(parsed.fast);
    }

    #[test]
    fn oversized_grid_dimension_is_rejected_not_wrapped() {
        let err = args(&["10", "4294967297"]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid width"), "{err:#}");
        let err = args(&["10", "80", "4294967296"]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid height"), "{err:#}");
        // the frame count is wider than a grid dimension
        assert_eq!(args(&["4294967297"]).unwrap().frames, 4_294_967_297);
    }

    #[test]
    fn non_numeric_and_extra_arguments_fail() {
        assert!(args(&["lots"]).is_err());
        assert!(args(&["1", "2", "3", "4"]).is_err());
    }
}
