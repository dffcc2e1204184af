//! xform: apply a chain of 2D transforms to a point.
//!
//! Transforms are applied in command-line order, e.g.
//! `xform --point=1,0 --rotate=1.5707963 --translate=2,0` rotates first.

use anyhow::{Context, Result, bail};
use math::{Located, Mat3, Point, Vector};

/// One step of the transform chain, as given on the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    Rotate(f64),
    Scale(f64),
    ScaleXy(f64, f64),
    Translate(Vector),
    RotateAbout(Point, f64),
    Affine(Mat3),
    Invert,
}

#[derive(Debug, PartialEq)]
struct Job {
    point: Point,
    steps: Vec<Step>,
}

fn parse_numbers(flag: &str, val: &str, arity: usize) -> Result<Vec<f64>> {
    let nums = val
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("--{flag}: '{s}' is not a number"))
        })
        .collect::<Result<Vec<_>>>()?;
    if nums.len() != arity {
        bail!("--{flag} expects {arity} value(s), got {}", nums.len());
    }
    Ok(nums)
}

fn parse_args<I>(args: I) -> Result<Job>
where
    I: IntoIterator<Item = String>,
{
    let mut job = Job {
        point: Point::ORIGIN,
        steps: Vec::new(),
    };
    for arg in args {
        let (flag, val) = match arg.strip_prefix("--") {
            Some(rest) => rest.split_once('=').unwrap_or((rest, "")),
            None => {
                log::warn!("Ignoring positional argument '{arg}'.");
                continue;
            }
        };
        let step = match flag {
            "point" => {
                let v = parse_numbers(flag, val, 2)?;
                job.point = Point::new(v[0], v[1]);
                continue;
            }
            "rotate" => Step::Rotate(parse_numbers(flag, val, 1)?[0]),
            "scale" => Step::Scale(parse_numbers(flag, val, 1)?[0]),
            "scale-xy" => {
                let v = parse_numbers(flag, val, 2)?;
                Step::ScaleXy(v[0], v[1])
            }
            "translate" => {
                let v = parse_numbers(flag, val, 2)?;
                Step::Translate(Vector::new(v[0], v[1]))
            }
            "rotate-about" => {
                let v = parse_numbers(flag, val, 3)?;
                Step::RotateAbout(Point::new(v[0], v[1]), v[2])
            }
            "affine" => {
                let v = parse_numbers(flag, val, 6)?;
                Step::Affine(Mat3::from_affine(&v)?)
            }
            "invert" => Step::Invert,
            other => {
                log::warn!("Unknown flag '--{other}', ignoring.");
                continue;
            }
        };
        log::debug!("Parsed step {step:?}");
        job.steps.push(step);
    }
    Ok(job)
}

/// Folds the steps into a single matrix; the first step is applied first.
fn compose(steps: &[Step]) -> Result<Mat3> {
    let mut m = Mat3::identity();
    for (i, step) in steps.iter().enumerate() {
        m = match *step {
            Step::Rotate(angle) => m.then(Mat3::rotation(angle)),
            Step::Scale(f) => m.then(Mat3::scale(f)),
            Step::ScaleXy(sx, sy) => m.then(Mat3::scale_xy(sx, sy)),
            Step::Translate(v) => m.then(Mat3::translation(v)),
            Step::RotateAbout(center, angle) => m.then(Mat3::rotation_about(center, angle)),
            Step::Affine(a) => m.then(a),
            Step::Invert => m
                .inverse()
                .with_context(|| format!("step {}: cannot invert the chain so far", i + 1))?,
        };
    }
    Ok(m)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let job = parse_args(std::env::args().skip(1))?;
    let m = compose(&job.steps)?;
    let mut p = job.point;
    p.transform(&m);

    log::info!(
        "Applied {} step(s) to {}: result {}",
        job.steps.len(),
        job.point,
        p
    );
    if !(p.x.is_finite() && p.y.is_finite()) {
        log::warn!("Result is not finite; check for degenerate transforms.");
    }
    println!("{} {}", p.x, p.y);
    Ok(())
}
