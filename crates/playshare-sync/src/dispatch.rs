use std::collections::HashMap;

use playshare_conf::CodeLanguage;
use playshare_remote::FetchError;
use playshare_remote::RemoteProject;
use playshare_remote::RemoteResolver;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task;
use tokio::task::JoinHandle;
use tokio::task::JoinSet;

use crate::reconciler::Reconciler;
use crate::reconciler::ResolveRequest;
use crate::reconciler::Trigger;

#[derive(Error, Debug)]
#[error("sync loop has stopped")]
pub struct SyncClosed;

/// Sends triggers to a running sync loop.
///
/// The loop exits once every handle is dropped and outstanding resolutions
/// have completed.
#[derive(Clone, Debug)]
pub struct SyncHandle {
    triggers: mpsc::UnboundedSender<Trigger>,
}

impl SyncHandle {
    pub fn send(&self, trigger: Trigger) -> Result<(), SyncClosed> {
        self.triggers.send(trigger).map_err(|_| SyncClosed)
    }

    pub fn load(&self) -> Result<(), SyncClosed> {
        self.send(Trigger::Load)
    }

    pub fn fragment_changed(&self, fragment: impl Into<String>) -> Result<(), SyncClosed> {
        self.send(Trigger::FragmentChanged(fragment.into()))
    }

    pub fn language_changed(&self, language: CodeLanguage) -> Result<(), SyncClosed> {
        self.send(Trigger::LanguageChanged(language))
    }
}

type Resolution = Result<RemoteProject, FetchError>;

/// Starts the loop that owns `reconciler`.
///
/// Remote resolutions run as separate tasks and report back into the loop,
/// so triggers keep being handled while a fetch is outstanding. The join
/// handle yields the reconciler once the loop has finished.
pub fn spawn(
    reconciler: Reconciler,
    resolver: RemoteResolver,
) -> (SyncHandle, JoinHandle<Reconciler>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(reconciler, resolver, rx));
    (SyncHandle { triggers: tx }, task)
}

async fn run(
    mut reconciler: Reconciler,
    resolver: RemoteResolver,
    mut triggers: mpsc::UnboundedReceiver<Trigger>,
) -> Reconciler {
    let mut pending: JoinSet<Resolution> = JoinSet::new();
    let mut requests: HashMap<task::Id, ResolveRequest> = HashMap::new();
    let mut open = true;

    loop {
        tokio::select! {
            trigger = triggers.recv(), if open => match trigger {
                Some(trigger) => {
                    if let Some(request) = reconciler.handle(trigger) {
                        let resolver = resolver.clone();
                        let id = request.id.clone();
                        let task = pending.spawn(async move { resolver.resolve(&id).await });
                        requests.insert(task.id(), request);
                    }
                }
                None => {
                    tracing::debug!(pending = pending.len(), "trigger channel closed");
                    open = false;
                }
            },
            Some(joined) = pending.join_next_with_id(), if !pending.is_empty() => {
                let task_id = match &joined {
                    Ok((task_id, _)) => *task_id,
                    Err(err) => err.id(),
                };
                if let Some(request) = requests.remove(&task_id) {
                    let result = joined.map_or_else(
                        |err| {
                            tracing::error!(id = %request.id, error = %err, "remote resolution task failed");
                            Err(FetchError::transport(
                                &request.id,
                                None,
                                format!("resolution task failed: {err}"),
                            ))
                        },
                        |(_, result)| result,
                    );
                    let completion = reconciler.complete(&request, result);
                    tracing::debug!(id = %request.id, ?completion, "remote resolution finished");
                } else {
                    tracing::error!(?task_id, "finished resolution has no request");
                }
            }
            else => break,
        }
    }

    reconciler
}
