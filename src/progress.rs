use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Track and log progress of a long-running loop,
/// safe to tick from many worker threads at once.
#[derive(Debug)]
pub struct Progress {
    label: String,
    total: usize,
    check: usize,
    ticks: AtomicUsize,
    begin: Instant,
}

impl Progress {
    /// log roughly `n` times over `total` ticks
    pub fn new(label: &str, total: usize, n: usize) -> Self {
        Self {
            label: label.to_string(),
            total,
            check: (total / n.max(1)).max(1),
            ticks: AtomicUsize::new(0),
            begin: Instant::now(),
        }
    }

    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn tick(&self) {
        let ticks = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        if ticks % self.check == 0 || ticks == self.total {
            let elapsed = self.begin.elapsed();
            log::info!(
                "{:<10} {:8.0?} {:>10} {:6.2}%   mean {:8.0}/s",
                self.label,
                elapsed,
                ticks,
                ticks as f32 / self.total.max(1) as f32 * 100f32,
                ticks as f32 / elapsed.as_secs_f32().max(f32::EPSILON),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_across_threads() {
        let ref progress = Progress::new("test", 400, 10);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(move || (0..100).for_each(|_| progress.tick()));
            }
        });
        assert!(progress.ticks() == 400);
    }

    #[test]
    fn tiny_totals_do_not_divide_by_zero() {
        let progress = Progress::new("tiny", 3, 100);
        progress.tick();
        assert!(progress.ticks() == 1);
    }
}
