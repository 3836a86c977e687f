use crate::graph::{ArcDirection, NodeKind};

/// Formats a number the way the target language writes doubles, keeping the
/// trailing `.0` on whole values so generated files stay byte-stable.
pub(super) fn fmt_num(value: f64) -> String {
    format!("{value:?}")
}

/// The statement table: one fixed template per action kind.
///
/// Control-flow kinds return `None` here because their emission is
/// structural; they are handled by the generator's branching walk. Adding a
/// node kind means adding one arm, and the exhaustive match makes a missing
/// one a build failure rather than a silent no-op.
pub(super) fn statement_for(kind: &NodeKind) -> Option<Vec<String>> {
    match kind {
        NodeKind::Forward { distance, power } => Some(vec![format!(
            "drive.forward({}, {});",
            fmt_num(*distance),
            fmt_num(*power)
        )]),
        NodeKind::Backward { distance, power } => Some(vec![format!(
            "drive.backward({}, {});",
            fmt_num(*distance),
            fmt_num(*power)
        )]),
        NodeKind::StrafeLeft { distance, power } => Some(vec![format!(
            "drive.strafeLeft({}, {});",
            fmt_num(*distance),
            fmt_num(*power)
        )]),
        NodeKind::StrafeRight { distance, power } => Some(vec![format!(
            "drive.strafeRight({}, {});",
            fmt_num(*distance),
            fmt_num(*power)
        )]),
        NodeKind::TurnLeft { angle } => {
            Some(vec![format!("drive.turnLeft({});", fmt_num(*angle))])
        }
        NodeKind::TurnRight { angle } => {
            Some(vec![format!("drive.turnRight({});", fmt_num(*angle))])
        }
        NodeKind::TurnToHeading { heading } => Some(vec![format!(
            "drive.turnToHeading({});",
            fmt_num(*heading)
        )]),
        NodeKind::MoveTo { x, y, heading } => Some(vec![match heading {
            Some(heading) => format!(
                "drive.moveTo({}, {}, {});",
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*heading)
            ),
            None => format!("drive.moveTo({}, {});", fmt_num(*x), fmt_num(*y)),
        }]),
        NodeKind::SplineTo { x, y, heading } => Some(vec![format!(
            "drive.splineTo({}, {}, {});",
            fmt_num(*x),
            fmt_num(*y),
            fmt_num(*heading)
        )]),
        NodeKind::Arc {
            radius,
            angle,
            direction,
        } => Some(vec![match direction {
            ArcDirection::Right => {
                format!("drive.arcRight({}, {});", fmt_num(*radius), fmt_num(*angle))
            }
            ArcDirection::Left => {
                format!("drive.arcLeft({}, {});", fmt_num(*radius), fmt_num(*angle))
            }
        }]),
        NodeKind::Wait { seconds } => {
            let millis = (seconds * 1000.0).round() as i64;
            Some(vec![format!("sleep({millis});")])
        }
        NodeKind::SetServo { servo, position } => {
            Some(vec![format!("{servo}.setPosition({});", fmt_num(*position))])
        }
        NodeKind::RunMotor { motor, power } => {
            Some(vec![format!("{motor}.setPower({});", fmt_num(*power))])
        }
        NodeKind::StopMotor { motor } => Some(vec![format!("{motor}.setPower(0.0);")]),
        NodeKind::Custom { code } => Some(
            code.lines()
                .map(|line| line.trim_end().to_string())
                .collect(),
        ),
        NodeKind::End => Some(vec!["requestOpModeStop();".to_string()]),
        NodeKind::Start
        | NodeKind::IfBranch { .. }
        | NodeKind::Loop { .. }
        | NodeKind::Parallel
        | NodeKind::ForEach { .. } => None,
    }
}
