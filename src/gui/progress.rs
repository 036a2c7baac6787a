// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, year: u32) {
        self.done += 1;
        self.set_status(format!("Fetched season {} ({}/{})", year, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.done == 0 {
            self.set_status(s!("Fetch failed"));
        } else {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(p: &GuiProgress) -> String {
        p.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[test]
    fn reports_counts_against_the_total() {
        let mut p = GuiProgress::new(Arc::new(Mutex::new(s!())));
        p.begin(1);
        p.log("Fetching 2021…");
        assert_eq!(status_of(&p), "Fetching 2021…");
        p.item_done(2021);
        assert_eq!(status_of(&p), "Fetched season 2021 (1/1)");
        p.finish();
        assert_eq!(status_of(&p), "Fetch complete (1/1)");
    }

    #[test]
    fn finish_without_items_is_a_failure() {
        let mut p = GuiProgress::new(Arc::new(Mutex::new(s!())));
        p.begin(1);
        p.finish();
        assert_eq!(status_of(&p), "Fetch failed");
    }
}
