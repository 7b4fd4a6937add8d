//! Runs a slider on a tokio task.
//!
//! The task owns the slider and wakes either for a command from the
//! [`SliderHandle`] or for the slider's next deadline. Dropping the handle
//! ends the task, which drops (and so disposes) the slider.

use std::future;
use std::sync::Arc;
use std::time::Instant;

use showreel_model::SlideItem;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::messages::SliderInput;
use crate::options::SliderOptions;
use crate::slider::{Slider, SliderSnapshot};
use crate::surface::RenderSurface;
use crate::time::TokioTimeProvider;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("slider driver has stopped")]
    Closed,
}

#[derive(Debug)]
pub enum SliderCommand {
    Input(SliderInput),
    UpdateSlides(Arc<[SlideItem]>),
    Snapshot(oneshot::Sender<SliderSnapshot>),
}

#[derive(Debug)]
pub struct SliderDriver;

impl SliderDriver {
    /// Move `slider` onto a new task.
    ///
    /// The slider should run on [`TokioTimeProvider`] so its deadlines and
    /// the task's sleeps agree on the current time.
    pub fn spawn<S>(slider: Slider<S>) -> SliderHandle
    where
        S: RenderSurface + Send + 'static,
    {
        let (commands, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(slider, receiver));
        SliderHandle {
            commands,
            task: Some(task),
        }
    }

    /// Build a slider on tokio's clock and spawn it.
    pub fn spawn_with<S>(surface: S, options: SliderOptions) -> SliderHandle
    where
        S: RenderSurface + Send + 'static,
    {
        let slider =
            Slider::with_clock(surface, options, Arc::new(TokioTimeProvider));
        Self::spawn(slider)
    }
}

/// Owner of a running driver task.
#[derive(Debug)]
pub struct SliderHandle {
    commands: mpsc::UnboundedSender<SliderCommand>,
    task: Option<JoinHandle<()>>,
}

impl SliderHandle {
    pub fn send(&self, input: SliderInput) -> Result<(), DriverError> {
        self.command(SliderCommand::Input(input))
    }

    pub fn update_slides(
        &self,
        items: impl Into<Arc<[SlideItem]>>,
    ) -> Result<(), DriverError> {
        self.command(SliderCommand::UpdateSlides(items.into()))
    }

    pub async fn snapshot(&self) -> Result<SliderSnapshot, DriverError> {
        let (reply, response) = oneshot::channel();
        self.command(SliderCommand::Snapshot(reply))?;
        response.await.map_err(|_| DriverError::Closed)
    }

    fn command(&self, command: SliderCommand) -> Result<(), DriverError> {
        self.commands.send(command).map_err(|_| DriverError::Closed)
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Abort the task without waiting for it.
    pub fn stop(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Close the command channel and wait for the task to wind down.
    pub async fn shutdown(mut self) {
        let task = self.task.take();
        drop(self);
        if let Some(task) = task {
            let _ = task.await;
        }
    }
}

impl Drop for SliderHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run<S>(
    mut slider: Slider<S>,
    mut commands: mpsc::UnboundedReceiver<SliderCommand>,
) where
    S: RenderSurface + Send + 'static,
{
    loop {
        let deadline = slider.next_deadline();
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => apply(&mut slider, command),
                None => break,
            },
            _ = sleep_until(deadline) => slider.poll(),
        }
    }
    debug!("slider driver stopped");
}

fn apply<S: RenderSurface>(slider: &mut Slider<S>, command: SliderCommand) {
    match command {
        SliderCommand::Input(input) => slider.handle(input),
        SliderCommand::UpdateSlides(items) => slider.update_slides(items),
        SliderCommand::Snapshot(reply) => {
            let _ = reply.send(slider.snapshot());
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline))
                .await
        }
        None => future::pending().await,
    }
}
