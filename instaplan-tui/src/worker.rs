//! Background worker thread — all network calls run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The UI
//! never blocks on HTTP; a cancel flag lets the user abandon a generation
//! (the in-flight response is then discarded rather than applied).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use instaplan_core::brief::ContentBrief;
use instaplan_core::i18n::Language;
use instaplan_core::plan::ContentPlan;
use instaplan_gen::{ClientConfig, GeminiClient, PlanCache};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    GeneratePlan {
        brief: ContentBrief,
        lang: Language,
        use_cache: bool,
    },
    AskAdvisor {
        question: String,
        lang: Language,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    PlanReady {
        plan: ContentPlan,
        from_cache: bool,
    },
    PlanFailed {
        error: String,
    },
    AdvisorReply {
        text: String,
    },
    AdvisorFailed {
        error: String,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    cancel: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("instaplan-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, cancel);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    cancel: Arc<AtomicBool>,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(cmd) => {
                cancel.store(false, Ordering::Relaxed);
                handle_command(cmd, &tx, &cancel);
            }
        }
    }
}

fn handle_command(cmd: WorkerCommand, tx: &Sender<WorkerResponse>, cancel: &Arc<AtomicBool>) {
    match cmd {
        WorkerCommand::GeneratePlan {
            brief,
            lang,
            use_cache,
        } => handle_generate(brief, lang, use_cache, tx, cancel),
        WorkerCommand::AskAdvisor { question, lang } => {
            handle_advisor(&question, lang, tx, cancel)
        }
        WorkerCommand::Shutdown => {} // handled in loop
    }
}

fn handle_generate(
    brief: ContentBrief,
    lang: Language,
    use_cache: bool,
    tx: &Sender<WorkerResponse>,
    cancel: &Arc<AtomicBool>,
) {
    let config = ClientConfig::load();
    let cache = PlanCache::new(PlanCache::default_dir());
    let key = PlanCache::key_for(&brief, lang, &config.plan_model);

    if use_cache {
        if let Some(plan) = cache.lookup(&key) {
            let _ = tx.send(WorkerResponse::PlanReady {
                plan,
                from_cache: true,
            });
            return;
        }
    }

    let client = GeminiClient::new(config);
    match client.generate_plan(&brief, lang) {
        Ok(plan) => {
            // A cancelled generation is discarded, not delivered late.
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            // Cache failures degrade silently; the plan is still good.
            let _ = cache.store(&key, &brief, lang, &client.config().plan_model, &plan);
            let _ = tx.send(WorkerResponse::PlanReady {
                plan,
                from_cache: false,
            });
        }
        Err(e) => {
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            let _ = tx.send(WorkerResponse::PlanFailed {
                error: e.to_string(),
            });
        }
    }
}

fn handle_advisor(
    question: &str,
    lang: Language,
    tx: &Sender<WorkerResponse>,
    cancel: &Arc<AtomicBool>,
) {
    let client = GeminiClient::new(ClientConfig::load());
    let result = client.ask_advisor(question, lang);
    if cancel.load(Ordering::Relaxed) {
        return;
    }
    match result {
        Ok(text) => {
            let _ = tx.send(WorkerResponse::AdvisorReply { text });
        }
        Err(e) => {
            let _ = tx.send(WorkerResponse::AdvisorFailed {
                error: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn worker_shutdown() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, _resp_rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        let handle = spawn_worker(cmd_rx, resp_tx, cancel);
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn worker_exits_when_channel_drops() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
        let (resp_tx, _resp_rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        let handle = spawn_worker(cmd_rx, resp_tx, cancel);
        drop(cmd_tx);
        handle.join().expect("worker should join cleanly");
    }
}
