//! `simd128-probe`: reports the processor's SIMD extensions and renders a
//! sample vector.
//!
//! ```text
//! simd128-probe [--json] [--style <json>] [--require <feature>]...
//! ```
//!
//! The render style can also come from `SIMD128_STYLE`, e.g.
//! `SIMD128_STYLE='{"delimiter": ", ", "open": "(", "close": ")"}'`.

use anyhow::{bail, Context};
use log::{debug, info};
use simd128::prelude::*;
use simd128::{probe, Feature, FormatStyle};

const STYLE_ENV: &str = "SIMD128_STYLE";

#[derive(Debug, Default)]
struct Args {
    json: bool,
    style: Option<String>,
    require: Vec<Feature>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--style" => {
                let style = args.next().context("--style expects a JSON object")?;
                parsed.style = Some(style);
            }
            "--require" => {
                let name = args.next().context("--require expects a feature name")?;
                parsed.require.push(name.parse()?);
            }
            other => bail!("unrecognized argument `{}`", other),
        }
    }
    Ok(parsed)
}

fn load_style(arg: Option<&str>) -> anyhow::Result<FormatStyle> {
    let from_env = std::env::var(STYLE_ENV).ok();
    let Some(raw) = arg.or(from_env.as_deref()) else {
        return Ok(FormatStyle::default());
    };
    let style = serde_json::from_str(raw)
        .with_context(|| format!("Failed to parse render style {:?}", raw))?;
    debug!("Render style: {:?}", style);
    Ok(style)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let style = load_style(args.style.as_deref())?;

    for feature in &args.require {
        probe::require(*feature).context("Required CPU feature check failed")?;
        info!("{} present", feature);
    }

    let features = probe::features();
    if args.json {
        let json = serde_json::to_string(&features).context("Failed to serialize features")?;
        println!("{}", json);
        return Ok(());
    }

    for feature in Feature::ALL {
        let state = if probe::has(feature) { "yes" } else { "no" };
        println!("{:<8}{}", feature, state);
    }

    let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
    let b = F32x4::new(0.5, 8.0, -3.0, 4.0);
    println!("a        {}", a.to_string_with(&style));
    println!("b        {}", b.to_string_with(&style));
    println!("a + b    {}", (a + b).to_string_with(&style));
    println!("max      {}", max(a, b).to_string_with(&style));
    println!("hadd     {}", hadd(a, b).to_string_with(&style));
    Ok(())
}
