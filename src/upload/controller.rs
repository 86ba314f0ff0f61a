use crate::upload::types::{SelectedFile, UploadRecord, UploadStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, warn};

/// Delay the simulated transfer takes before resolving.
pub const DEFAULT_TRANSFER_DELAY: Duration = Duration::from_millis(1500);

/// Outcome of a resolution process, sent back to the UI thread.
struct Resolution {
    attempt_id: u64,
    filename: String,
    status: UploadStatus,
}

struct ActiveUpload {
    record: UploadRecord,
    cancel_flag: Arc<AtomicBool>,
}

/// Single-slot upload lifecycle controller.
///
/// Holds at most one in-flight upload plus the append-only history of
/// resolved ones. `start` installs a Pending attempt and spawns a timed
/// resolution process; `cancel` discards the attempt synchronously; `poll`
/// pumps finished resolutions into the history on the UI thread.
///
/// Starting while an upload is pending implicitly cancels the previous
/// attempt, so at most one live resolution process exists at any time. A
/// cancelled or preempted attempt can never append a record: its worker
/// checks the cancel flag before sending, and `poll` additionally drops any
/// resolution whose attempt id no longer matches the active slot.
pub struct UploadController {
    transfer_delay: Duration,
    next_id: u64,
    active: Option<ActiveUpload>,
    completed: Vec<UploadRecord>,
    resolution_sender: Sender<Resolution>,
    resolution_receiver: Receiver<Resolution>,
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadController {
    pub fn new() -> Self {
        Self::with_transfer_delay(DEFAULT_TRANSFER_DELAY)
    }

    pub fn with_transfer_delay(transfer_delay: Duration) -> Self {
        let (resolution_sender, resolution_receiver) = channel();
        Self {
            transfer_delay,
            next_id: 0,
            active: None,
            completed: Vec::new(),
            resolution_sender,
            resolution_receiver,
        }
    }

    /// Begins an upload for `file`, preempting any pending one.
    pub fn start(&mut self, file: SelectedFile) {
        if let Some(previous) = self.active.take() {
            previous.cancel_flag.store(true, Ordering::SeqCst);
            debug!(file = %previous.record.filename, "preempting pending upload");
        }

        let attempt_id = self.allocate_id();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let record = UploadRecord {
            id: attempt_id,
            filename: file.name.clone(),
            status: UploadStatus::Pending,
        };
        debug!(file = %file.name, content_type = %file.content_type, "upload started");

        let sender = self.resolution_sender.clone();
        let flag = Arc::clone(&cancel_flag);
        let delay = self.transfer_delay;

        std::thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    warn!("failed to start resolution runtime: {}", e);
                    return;
                }
            };
            rt.block_on(async {
                tokio::time::sleep(delay).await;
                if flag.load(Ordering::SeqCst) {
                    return;
                }
                let status = if file.is_image() {
                    UploadStatus::Succeeded
                } else {
                    UploadStatus::Failed
                };
                let _ = sender.send(Resolution {
                    attempt_id,
                    filename: file.name,
                    status,
                });
            });
        });

        self.active = Some(ActiveUpload {
            record,
            cancel_flag,
        });
    }

    /// Discards the pending upload, if any. Synchronous and idempotent: the
    /// active slot is cleared immediately and no record is appended for the
    /// cancelled attempt. No-op when idle.
    pub fn cancel(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        active.cancel_flag.store(true, Ordering::SeqCst);
        debug!(file = %active.record.filename, "upload cancelled");
    }

    /// Applies any finished resolutions. Returns true if state changed so
    /// the caller knows to repaint.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(resolution) = self.resolution_receiver.try_recv() {
            let matches_active = self
                .active
                .as_ref()
                .map(|a| a.record.id == resolution.attempt_id)
                .unwrap_or(false);
            if !matches_active {
                // Attempt was cancelled or preempted after its timer fired.
                debug!(file = %resolution.filename, "dropping stale resolution");
                continue;
            }

            self.active = None;
            let id = self.allocate_id();
            debug!(file = %resolution.filename, status = ?resolution.status, "upload resolved");
            self.completed.push(UploadRecord {
                id,
                filename: resolution.filename,
                status: resolution.status,
            });
            changed = true;
        }
        changed
    }

    pub fn active(&self) -> Option<&UploadRecord> {
        self.active.as_ref().map(|a| &a.record)
    }

    pub fn completed(&self) -> &[UploadRecord] {
        &self.completed
    }

    pub fn is_uploading(&self) -> bool {
        self.active.is_some()
    }

    pub fn succeeded_count(&self) -> usize {
        self.completed
            .iter()
            .filter(|r| r.status == UploadStatus::Succeeded)
            .count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &UploadRecord> {
        self.completed
            .iter()
            .filter(|r| r.status == UploadStatus::Failed)
    }

    /// Resolved records plus the pending one, for the "n/total" summary.
    pub fn total_attempts(&self) -> usize {
        self.completed.len() + usize::from(self.active.is_some())
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    const TEST_DELAY: Duration = Duration::from_millis(40);

    fn test_controller() -> UploadController {
        UploadController::with_transfer_delay(TEST_DELAY)
    }

    fn png() -> SelectedFile {
        SelectedFile::new("photo.png", "image/png")
    }

    fn pdf() -> SelectedFile {
        SelectedFile::new("report.pdf", "application/pdf")
    }

    fn wait_until_idle(controller: &mut UploadController) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while controller.is_uploading() {
            assert!(Instant::now() < deadline, "upload never resolved");
            controller.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    /// Lets any straggling resolution land, then applies it.
    fn drain_after_delay(controller: &mut UploadController) {
        std::thread::sleep(TEST_DELAY * 3);
        controller.poll();
    }

    #[test]
    fn image_upload_resolves_to_succeeded() {
        let mut controller = test_controller();
        controller.start(png());
        wait_until_idle(&mut controller);

        assert_eq!(controller.completed().len(), 1);
        let record = &controller.completed()[0];
        assert_eq!(record.filename, "photo.png");
        assert_eq!(record.status, UploadStatus::Succeeded);
        assert!(controller.active().is_none());
    }

    #[test]
    fn non_image_upload_resolves_to_failed() {
        let mut controller = test_controller();
        controller.start(pdf());
        wait_until_idle(&mut controller);

        assert_eq!(controller.completed().len(), 1);
        let record = &controller.completed()[0];
        assert_eq!(record.filename, "report.pdf");
        assert_eq!(record.status, UploadStatus::Failed);
    }

    #[test]
    fn pending_record_visible_while_uploading() {
        let mut controller = test_controller();
        controller.start(png());

        let active = controller.active().expect("upload should be pending");
        assert_eq!(active.filename, "photo.png");
        assert_eq!(active.status, UploadStatus::Pending);
        assert_eq!(controller.total_attempts(), 1);

        wait_until_idle(&mut controller);
    }

    #[test]
    fn cancel_discards_pending_attempt() {
        let mut controller = test_controller();
        controller.start(png());
        controller.cancel();

        // Cleared immediately, not on the next poll.
        assert!(controller.active().is_none());

        drain_after_delay(&mut controller);
        assert!(controller.completed().is_empty());
        assert!(controller.active().is_none());
    }

    #[test]
    fn cancel_without_active_upload_is_a_noop() {
        let mut controller = test_controller();
        controller.cancel();
        controller.cancel();

        assert!(controller.active().is_none());
        assert!(controller.completed().is_empty());
    }

    #[test]
    fn second_start_preempts_first_without_stale_record() {
        let mut controller = test_controller();
        controller.start(pdf());
        controller.start(png());

        assert_eq!(controller.total_attempts(), 1);
        wait_until_idle(&mut controller);

        assert_eq!(controller.completed().len(), 1);
        assert_eq!(controller.completed()[0].filename, "photo.png");
        assert_eq!(controller.completed()[0].status, UploadStatus::Succeeded);

        // The preempted timer must not append anything later.
        drain_after_delay(&mut controller);
        assert_eq!(controller.completed().len(), 1);
    }

    #[test]
    fn completed_is_append_only_with_increasing_ids() {
        let mut controller = test_controller();

        controller.start(png());
        wait_until_idle(&mut controller);
        let first = controller.completed()[0].clone();

        controller.start(pdf());
        wait_until_idle(&mut controller);

        controller.start(SelectedFile::new("icon.gif", "image/gif"));
        wait_until_idle(&mut controller);

        let completed = controller.completed();
        assert_eq!(completed.len(), 3);

        // Prior entries are untouched by later resolutions.
        assert_eq!(completed[0].id, first.id);
        assert_eq!(completed[0].filename, first.filename);
        assert_eq!(completed[0].status, first.status);

        assert!(completed.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(
            completed
                .iter()
                .map(|r| r.status)
                .collect::<Vec<_>>(),
            vec![
                UploadStatus::Succeeded,
                UploadStatus::Failed,
                UploadStatus::Succeeded
            ]
        );
    }

    #[test]
    fn counts_track_resolved_statuses() {
        let mut controller = test_controller();
        controller.start(png());
        wait_until_idle(&mut controller);
        controller.start(pdf());
        wait_until_idle(&mut controller);

        assert_eq!(controller.succeeded_count(), 1);
        assert_eq!(controller.failed().count(), 1);
        assert_eq!(controller.total_attempts(), 2);
    }
}
