use quickmath::{bits, trig};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use itertools::Itertools;
use rayon::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

/// How an approximation is scored against the exact function.
#[derive(Debug, Clone, Copy)]
enum Metric {
    Absolute,
    Relative,
}

/// One approximation and the interval it is sampled on.
struct Survey {
    name: &'static str,
    lo: f64,
    hi: f64,
    metric: Metric,
    approx: fn(f64) -> f64,
    exact: fn(f64) -> f64,
}

#[derive(Debug)]
struct Report {
    name: &'static str,
    metric: Metric,
    max: f64,
    mean: f64,
}

impl Survey {
    /// Sample the interval at `n_points + 1` evenly spaced points. Points where the error is not
    /// finite (a zero of the exact function under the relative metric) are skipped.
    fn run(&self, n_points: usize) -> Report {
        let (sum, max, count) = (0..=n_points)
            .into_par_iter()
            .map(|i| {
                let x = self.lo + (self.hi - self.lo) * i as f64 / n_points as f64;
                let exact = (self.exact)(x);
                let error = ((self.approx)(x) - exact).abs();
                match self.metric {
                    Metric::Absolute => error,
                    Metric::Relative => error / exact.abs(),
                }
            })
            .filter(|error| error.is_finite())
            .fold(
                || (0.0, 0.0_f64, 0_usize),
                |(sum, max, count), error| (sum + error, max.max(error), count + 1),
            )
            .reduce(
                || (0.0, 0.0, 0),
                |(s1, m1, c1), (s2, m2, c2)| (s1 + s2, m1.max(m2), c1 + c2),
            );

        Report {
            name: self.name,
            metric: self.metric,
            max,
            mean: sum / count.max(1) as f64,
        }
    }
}

fn surveys() -> Vec<Survey> {
    use Metric::*;

    vec![
        Survey {
            name: "inverse_float",
            lo: 0.01,
            hi: 100.0,
            metric: Relative,
            approx: |x| bits::inverse_float(x as f32) as f64,
            exact: |x| 1.0 / x,
        },
        Survey {
            name: "inv_sqrt_float",
            lo: 0.01,
            hi: 100.0,
            metric: Relative,
            approx: |x| bits::inv_sqrt_float(x as f32) as f64,
            exact: |x| 1.0 / x.sqrt(),
        },
        Survey {
            name: "inv_sqrt_double",
            lo: 0.01,
            hi: 100.0,
            metric: Relative,
            approx: bits::inv_sqrt_double,
            exact: |x| 1.0 / x.sqrt(),
        },
        Survey {
            name: "sqrt_float",
            lo: 0.001,
            hi: 1000.0,
            metric: Relative,
            approx: |x| bits::sqrt_float(x as f32) as f64,
            exact: f64::sqrt,
        },
        Survey {
            name: "pow_double (y = 0.5)",
            lo: 0.5,
            hi: 4.0,
            metric: Relative,
            approx: |x| bits::pow_double(x, 0.5),
            exact: |x| x.powf(0.5),
        },
        Survey {
            name: "pow_double (y = 2)",
            lo: 0.5,
            hi: 4.0,
            metric: Relative,
            approx: |x| bits::pow_double(x, 2.0),
            exact: |x| x.powf(2.0),
        },
        Survey {
            name: "exp_double",
            lo: 0.0,
            hi: 20.0,
            metric: Relative,
            approx: bits::exp_double,
            exact: f64::exp,
        },
        Survey {
            name: "ln_double",
            lo: 0.001,
            hi: 1000.0,
            metric: Absolute,
            approx: bits::ln_double,
            exact: f64::ln,
        },
        Survey {
            name: "sin_double",
            lo: -PI,
            hi: PI,
            metric: Absolute,
            approx: trig::sin_double,
            exact: f64::sin,
        },
        Survey {
            name: "cos_double",
            lo: -3.0 * FRAC_PI_2,
            hi: FRAC_PI_2,
            metric: Absolute,
            approx: trig::cos_double,
            exact: f64::cos,
        },
        Survey {
            name: "sin_float_normalized",
            lo: -1000.0,
            hi: 1000.0,
            metric: Absolute,
            approx: |x| trig::sin_float_normalized(x as f32) as f64,
            exact: f64::sin,
        },
        Survey {
            name: "cos_float_normalized",
            lo: -1000.0,
            hi: 1000.0,
            metric: Absolute,
            approx: |x| trig::cos_float_normalized(x as f32) as f64,
            exact: f64::cos,
        },
        Survey {
            name: "tan_double",
            lo: -1.0,
            hi: 1.0,
            metric: Relative,
            approx: trig::tan_double,
            exact: f64::tan,
        },
        Survey {
            name: "tan_double_hp",
            lo: -1.5,
            hi: 1.5,
            metric: Relative,
            approx: trig::tan_double_hp,
            exact: f64::tan,
        },
    ]
}

fn main() {
    // # of intervals each approximation is sampled on
    let n_points = 1 << 20;

    let surveys = surveys();
    println!("Surveying {} approximations at {} points each", surveys.len(), n_points + 1);

    let progress = ProgressBar::new(surveys.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40} {pos}/{len}"),
    );

    let reports: Vec<Report> = surveys
        .par_iter()
        .progress_with(progress.clone())
        .map(|survey| survey.run(n_points))
        .collect();
    progress.finish();

    println!(
        "{:<24} {:>9} {:>12} {:>12}",
        "approximation", "metric", "max error", "mean error"
    );
    for report in reports
        .iter()
        .sorted_by(|a, b| b.max.partial_cmp(&a.max).unwrap_or(std::cmp::Ordering::Equal))
    {
        println!(
            "{:<24} {:>9} {:>12.6} {:>12.6}",
            report.name,
            format!("{:?}", report.metric),
            report.max,
            report.mean
        );
    }
}
