// src/season/cache.rs
//
// Process-wide memo: year → normalized season. Populated lazily, never
// evicted. At most 72 seasons exist, so growth stays small.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::progress::Progress;
use crate::specs::per_game;
use crate::table::{RawTable, SeasonTable};

use super::normalize;

/// Where raw season tables come from.
pub trait SeasonSource: Send + Sync {
    fn fetch(&self, year: u32) -> Result<RawTable>;
}

/// The live website.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSource;

impl SeasonSource for WebSource {
    fn fetch(&self, year: u32) -> Result<RawTable> {
        per_game::fetch(year)
    }
}

impl<S: SeasonSource + ?Sized> SeasonSource for Arc<S> {
    fn fetch(&self, year: u32) -> Result<RawTable> {
        (**self).fetch(year)
    }
}

pub struct SeasonCache<S: SeasonSource = WebSource> {
    source: S,
    seasons: Mutex<HashMap<u32, Arc<SeasonTable>>>,
}

impl Default for SeasonCache<WebSource> {
    fn default() -> Self {
        Self::new(WebSource)
    }
}

impl<S: SeasonSource> SeasonCache<S> {
    pub fn new(source: S) -> Self {
        Self { source, seasons: Mutex::new(HashMap::new()) }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u32, Arc<SeasonTable>>> {
        // A panic elsewhere can't leave the map half-written; keep using it.
        self.seasons.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, year: u32) -> Option<Arc<SeasonTable>> {
        self.lock().get(&year).cloned()
    }

    pub fn get_or_load(&self, year: u32) -> Result<Arc<SeasonTable>> {
        self.get_or_load_with(year, None)
    }

    /// Cached season, or fetch + normalize + insert.
    ///
    /// The lock is not held during the fetch. Two callers racing on the same
    /// new year may both fetch; the first insert wins and both get that table.
    /// Failures are returned as-is and nothing is cached.
    pub fn get_or_load_with(
        &self,
        year: u32,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Arc<SeasonTable>> {
        if let Some(hit) = self.get(year) {
            logd!("Cache: hit year={}", year);
            return Ok(hit);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.begin(1);
            p.log(&format!("Fetching {}…", year));
        }

        let loaded = self
            .source
            .fetch(year)
            .and_then(|raw| normalize(year, raw));

        let table = match loaded {
            Ok(t) => t,
            Err(e) => {
                loge!("Fetch: Error year={}: {}", year, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e);
            }
        };

        logf!("Fetch: OK year={} rows={} cols={}", year, table.nrows(), table.ncols());

        let shared = Arc::clone(
            self.lock()
                .entry(year)
                .or_insert_with(|| Arc::new(table)),
        );

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(year);
            p.finish();
        }
        Ok(shared)
    }

    /// Years currently cached, ascending.
    pub fn cached_years(&self) -> Vec<u32> {
        let mut years: Vec<u32> = self.lock().keys().copied().collect();
        years.sort_unstable();
        years
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
