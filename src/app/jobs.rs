use super::*;
use crate::error::{AssetLoadError, GatewayError};
use crate::feedback::{Feedback, resolve_feedback};
use crate::model::{ImageHandle, LevelDefinition};
use log::{info, warn};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use thiserror::Error;

/// Llamada externa pendiente. El controlador la describe y otro la ejecuta.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    OriginalImage { level_id: usize, prompt: String },
    Recreation { words: Vec<String> },
    Feedback { level: LevelDefinition, words: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketedJob {
    pub ticket: u64,
    pub job: Job,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    OriginalImage(ImageHandle),
    Recreation { image: ImageHandle, prompt: String },
    Feedback(Feedback),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    pub ticket: u64,
    pub outcome: JobOutcome,
}

pub(crate) struct InFlightJob {
    ticket: u64,
    job: Job,
    rx: Receiver<JobResult>,
}

#[derive(Debug, Error)]
enum ImageFailure {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Asset(#[from] AssetLoadError),
}

/// Genera la imagen y la deja descodificada
fn prepare_image(gateways: &Gateways, prompt: &str) -> Result<ImageHandle, ImageFailure> {
    let handle = gateways.images.generate(prompt)?;
    let pixels = gateways.images.preload(&handle)?;
    Ok(handle.with_pixels(pixels))
}

/// Resultado sustituto cuando el servicio falla o el hilo se pierde
pub fn degraded_outcome(job: &Job) -> JobOutcome {
    match job {
        Job::OriginalImage { level_id, .. } => {
            JobOutcome::OriginalImage(ImageHandle::placeholder_for_level(*level_id))
        }
        Job::Recreation { words } => JobOutcome::Recreation {
            image: ImageHandle::placeholder_for_words(words),
            prompt: words.join(" "),
        },
        Job::Feedback { level, words } => JobOutcome::Feedback(resolve_feedback(
            level,
            words,
            Err(GatewayError::MissingContent("worker result")),
        )),
    }
}

/// Ejecuta el trabajo de forma bloqueante. Nunca falla: los errores de los
/// servicios se sustituyen por placeholders o feedback local.
pub fn execute(job: &Job, gateways: &Gateways) -> JobOutcome {
    match job {
        Job::OriginalImage { level_id, prompt } => match prepare_image(gateways, prompt) {
            Ok(image) => JobOutcome::OriginalImage(image),
            Err(err) => {
                warn!("image for level {level_id} unavailable, using placeholder: {err}");
                degraded_outcome(job)
            }
        },
        Job::Recreation { words } => {
            let basic = words.join(" ");
            let prompt = match &gateways.enhancer {
                Some(enhancer) => enhancer.enhance(&basic).unwrap_or_else(|err| {
                    warn!("prompt enhancement failed, using raw words: {err}");
                    basic.clone()
                }),
                None => basic.clone(),
            };
            let image = prepare_image(gateways, &prompt).unwrap_or_else(|err| {
                warn!("recreation unavailable, using placeholder: {err}");
                ImageHandle::placeholder_for_words(words)
            });
            JobOutcome::Recreation { image, prompt }
        }
        Job::Feedback { level, words } => {
            let response = gateways.feedback.get_feedback(&level.prompt, words);
            JobOutcome::Feedback(resolve_feedback(level, words, response))
        }
    }
}

impl MirrorApp {
    pub(crate) fn queue_job(&mut self, job: Job) {
        debug!("queueing {job:?}");
        self.pending_job = Some(TicketedJob {
            ticket: self.session.ticket(),
            job,
        });
    }

    /// Olvida el trabajo pendiente y el que está en marcha
    pub(crate) fn drop_jobs(&mut self) {
        self.pending_job = None;
        self.in_flight = None;
    }

    pub fn pending_job(&self) -> Option<&TicketedJob> {
        self.pending_job.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending_job.is_some() || self.in_flight.is_some()
    }

    /// Ejecuta el trabajo pendiente en este hilo. Devuelve `false` si no había.
    pub fn run_pending_job(&mut self) -> bool {
        let Some(pending) = self.pending_job.take() else {
            return false;
        };
        let outcome = execute(&pending.job, &self.gateways);
        self.apply_job_result(JobResult {
            ticket: pending.ticket,
            outcome,
        });
        true
    }

    /// Lanza el trabajo pendiente en un hilo aparte
    pub fn dispatch_pending_job(&mut self) {
        if self.in_flight.is_some() {
            return;
        }
        let Some(pending) = self.pending_job.take() else {
            return;
        };

        let (tx, rx) = mpsc::channel::<JobResult>();
        let gateways = Arc::clone(&self.gateways);
        let TicketedJob { ticket, job } = pending;
        let worker_job = job.clone();

        std::thread::spawn(move || {
            let outcome = execute(&worker_job, &gateways);
            // Si el receptor ya no existe el resultado es obsoleto
            let _ = tx.send(JobResult { ticket, outcome });
        });

        self.in_flight = Some(InFlightJob { ticket, job, rx });
    }

    pub fn poll_job_result(&mut self) {
        let received = match self.in_flight.as_ref() {
            Some(in_flight) => in_flight.rx.try_recv(),
            None => return,
        };

        match received {
            Ok(result) => {
                self.in_flight = None;
                self.apply_job_result(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                if let Some(lost) = self.in_flight.take() {
                    warn!("worker for {:?} stopped without a result", lost.job);
                    let outcome = degraded_outcome(&lost.job);
                    self.apply_job_result(JobResult {
                        ticket: lost.ticket,
                        outcome,
                    });
                }
            }
        }
    }

    /// Aplica un resultado si pertenece al reto actual y a la fase que lo espera
    pub fn apply_job_result(&mut self, result: JobResult) {
        if result.ticket != self.session.ticket() {
            debug!(
                "dropping stale result (ticket {} != {})",
                result.ticket,
                self.session.ticket()
            );
            return;
        }

        match (self.state, result.outcome) {
            (AppState::GeneratingImage, JobOutcome::OriginalImage(image)) => {
                self.on_original_ready(image);
            }
            (AppState::GeneratingRecreation, JobOutcome::Recreation { image, prompt }) => {
                self.on_recreation_ready(image, prompt);
            }
            (AppState::Learning, JobOutcome::Feedback(feedback)) => {
                info!(
                    "feedback ready for level {:?} ({:?})",
                    self.session.current_level(),
                    feedback.source
                );
                self.session.feedback = Some(feedback);
            }
            (state, _) => {
                warn!("ignoring job result while in {state:?}");
            }
        }
    }
}
