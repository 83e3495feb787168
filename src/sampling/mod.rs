
//! Sampling of equations into point sequences for plotting.
//!
//! A point whose evaluation fails or is not finite is omitted, so
//! sampling only fails when the expression itself does not parse. The
//! contour grid is the exception: failed cells read as zero.

mod adaptive;
mod config;
mod contour;
mod explicit;
mod implicit;
mod parametric;

pub use adaptive::{sample_adaptive, sample_adaptive_with_config};
pub use config::SamplingConfig;
pub use contour::{ContourGrid, sample_contour_grid, sample_contour_grid_with_config};
pub use explicit::{sample_explicit, sample_explicit_expr};
pub use implicit::{sample_implicit, sample_implicit_with_config};
pub use parametric::{sample_parametric, sample_polar};

use crate::classify::{ClassifiedEquation, EquationKind};
use crate::eval::{Expression, VariableScope};
use crate::expr::parser::ParseError;
use crate::util::point::Point2D;
use crate::view::ViewState;

use tracing::trace;

/// Evaluates `expr` with the given bindings. Failures are logged and
/// reported as `None`; non-finite results are returned as they are.
fn evaluate_at(expr: &Expression, bindings: &[(&str, f64)]) -> Option<f64> {
  let scope: VariableScope = bindings.iter().copied().collect();
  match expr.evaluate(&scope) {
    Ok(value) => Some(value),
    Err(err) => {
      trace!(source = expr.source(), ?bindings, %err, "Evaluation failed");
      None
    }
  }
}

/// Samples a classified equation over the visible region of `view`,
/// using the sampler for its family.
pub fn sample_classified(
  equation: &ClassifiedEquation,
  view: &ViewState,
  config: &SamplingConfig,
) -> Result<Vec<Point2D>, ParseError> {
  match &equation.kind {
    EquationKind::Explicit { function } => {
      sample_explicit(function, view.x_min, view.x_max, config.explicit_samples)
    }
    EquationKind::Implicit { expression } => {
      sample_implicit_with_config(
        expression,
        (view.x_min, view.x_max),
        (view.y_min, view.y_max),
        config.implicit_resolution,
        config,
      )
    }
    EquationKind::Parametric { x_function, y_function } => {
      sample_parametric(x_function, y_function, config.t_min, config.t_max, config.parametric_samples)
    }
    EquationKind::Polar { function } => {
      sample_polar(function, config.theta_min, config.theta_max, config.parametric_samples)
    }
  }
}
