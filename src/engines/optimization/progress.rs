use super::engine::ProgressCallback;

/// Callback used when the caller does not want progress reporting.
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _bred: usize, _immigrants: usize) {}
}

/// Logs generation progress through the `log` facade.
pub struct ConsoleProgress;

impl ProgressCallback for ConsoleProgress {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, bred: usize, immigrants: usize) {
        log::info!(
            "Generation {} complete: {} bred offspring, {} random immigrants",
            generation + 1,
            bred,
            immigrants
        );
    }
}
