use crate::foundation::error::{ExtrudeError, ExtrudeResult};

/// How the canvas is partitioned across workers.
///
/// Each band of canvas rows runs the whole step sequence on its own, so the
/// result is identical to a serial run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtrudeThreading {
    pub parallel: bool,
    /// Canvas rows per band. Clamped to `1..=height` of the mask.
    pub band_rows: usize,
    /// Worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for ExtrudeThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            band_rows: 64,
            threads: None,
        }
    }
}

impl ExtrudeThreading {
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }

    /// Band height clamped to `1..=height`.
    pub(crate) fn normalized_band_rows(&self, height: u32) -> usize {
        self.band_rows.clamp(1, (height as usize).max(1))
    }
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> ExtrudeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ExtrudeError::validation(
            "extrude threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ExtrudeError::validation(format!("failed to build rayon thread pool: {e}")))
}
