//! Non-interactive mode: one fetch, one filtered listing on stdout.

use std::io::{self, Write};
use thiserror::Error;

use crate::api::{Character, CharacterClient, FetchError};
use crate::card::CharacterCard;
use crate::filter::{FilterOutcome, FilterSelection, NO_MATCHES_MESSAGE};

#[derive(Debug, Error)]
pub enum PrintError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Fetch, filter and write one line per card. Returns the number of cards.
pub async fn print_characters<W: Write>(
    client: &CharacterClient,
    selection: &FilterSelection,
    out: &mut W,
) -> Result<usize, PrintError> {
    let characters = client.fetch_characters().await?;
    let printed = write_listing(&characters, selection, out)?;
    tracing::info!(
        printed,
        loaded = characters.len(),
        status = %selection.status,
        gender = %selection.gender,
        "Listing written"
    );
    Ok(printed)
}

/// Write the filtered listing for an already-loaded list.
pub fn write_listing<W: Write>(
    characters: &[Character],
    selection: &FilterSelection,
    out: &mut W,
) -> io::Result<usize> {
    match selection.apply(characters) {
        FilterOutcome::Matches(matched) => {
            for character in &matched {
                writeln!(out, "{}", CharacterCard::from_character(character).summary_line())?;
            }
            out.flush()?;
            Ok(matched.len())
        }
        FilterOutcome::NoMatches => {
            writeln!(out, "{}", NO_MATCHES_MESSAGE)?;
            out.flush()?;
            Ok(0)
        }
    }
}
