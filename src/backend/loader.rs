#![cfg(feature = "server")]
use anyhow::{Context, Result};

use crate::backend::copa_api::{CopaBackend, Counter};
use crate::shared::types::HomeCounts;

/// Fetches the three landing page counters concurrently.
///
/// All-or-nothing: the first failing request fails the whole load, there is
/// no partial result and no retry.
pub async fn load_home_counts<B: CopaBackend + ?Sized>(backend: &B) -> Result<HomeCounts> {
    let (polls_count, guesses_count, users_count) = futures::try_join!(
        async {
            backend
                .count(Counter::Polls)
                .await
                .context("counting polls")
        },
        async {
            backend
                .count(Counter::Guesses)
                .await
                .context("counting guesses")
        },
        async {
            backend
                .count(Counter::Users)
                .await
                .context("counting users")
        },
    )?;

    Ok(HomeCounts {
        polls_count,
        guesses_count,
        users_count,
    })
}
