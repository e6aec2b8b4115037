//! Fail-fast snapshot fan-out: one render task per hole of a course.

use std::sync::Arc;

use futures::future::BoxFuture;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::camera::{CameraPose, camera_distance};
use crate::domain::Course;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The hole's feature set lacks a usable green or tee reference, so no
    /// camera pose can be derived for it.
    #[error("hole {hole_id} has undefined geometry (missing green or tee reference)")]
    GeometryUndefined { hole_id: i64 },
    #[error("rendering hole {hole_id} failed: {reason}")]
    Render { hole_id: i64, reason: String },
    #[error("snapshot task for hole {hole_id} aborted: {reason}")]
    Task { hole_id: i64, reason: String },
}

/// Snapshot render target size in screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotSize {
    pub width: f64,
    pub height: f64,
}

/// Target width-to-height shape for a snapshot image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

/// Largest size with the requested aspect ratio that fits inside the
/// available screen area.
pub fn snapshot_size(aspect: AspectRatio, available: SnapshotSize) -> SnapshotSize {
    let available_ratio = available.width / available.height;
    let target_ratio = aspect.width / aspect.height;

    if target_ratio > available_ratio {
        SnapshotSize {
            width: available.width,
            height: available.width / target_ratio,
        }
    } else {
        SnapshotSize {
            width: available.height * target_ratio,
            height: available.height,
        }
    }
}

/// External render collaborator that produces one snapshot image per camera
/// pose. Rendering resources and retries live behind this boundary.
pub trait SnapshotRenderer: Send + Sync {
    fn render(
        &self,
        hole_id: i64,
        camera: CameraPose,
        size: SnapshotSize,
    ) -> BoxFuture<'static, Result<(), String>>;
}

/// Render a snapshot for every hole of `course`, one task per hole.
///
/// Holes are independent and run concurrently in any order. The first
/// failure cancels all outstanding sibling tasks and is the only error
/// surfaced; a hole with undefined geometry fails before its task spawns.
pub async fn snapshot_course<R>(
    course: &Course,
    size: SnapshotSize,
    renderer: Arc<R>,
) -> Result<(), SnapshotError>
where
    R: SnapshotRenderer + 'static,
{
    let cancel = CancellationToken::new();
    let mut tasks: JoinSet<Result<(), SnapshotError>> = JoinSet::new();
    let mut failure: Option<SnapshotError> = None;

    for hole in course.holes() {
        let geometry = hole.geometry();
        let (Some(centroid), Some(heading), Some(distance)) =
            (geometry.centroid, geometry.heading, geometry.hole_distance)
        else {
            failure = Some(SnapshotError::GeometryUndefined {
                hole_id: hole.hole_id,
            });
            break;
        };

        let camera = CameraPose::looking_at(
            centroid,
            camera_distance(distance.meters(), 0.0),
            heading,
        );
        let hole_id = hole.hole_id;
        let renderer = Arc::clone(&renderer);
        let cancel = cancel.clone();
        tasks.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => Ok(()),
                result = renderer.render(hole_id, camera, size) => {
                    result.map_err(|reason| SnapshotError::Render { hole_id, reason })
                }
            }
        });
    }

    if failure.is_none() {
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    failure = Some(error);
                    break;
                }
                Err(join_error) => {
                    failure = Some(SnapshotError::Task {
                        hole_id: -1,
                        reason: join_error.to_string(),
                    });
                    break;
                }
            }
        }
    }

    if let Some(error) = failure {
        cancel.cancel();
        tasks.shutdown().await;
        return Err(error);
    }
    Ok(())
}
