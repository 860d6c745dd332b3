//! Producer/consumer pipeline: three stage threads joined by two bounded
//! channels.

use crossbeam::channel::bounded;
use std::thread;

use crate::config::BenchConfig;

/// A full channel blocks the sending stage, so a fast producer is paced to
/// its consumer. Dropping a sender is the completion signal: it happens on
/// every exit path, including an unwinding stage, so the stages downstream
/// always drain and stop instead of blocking forever. Both channels are FIFO
/// and each stage is a single thread, so this strategy keeps source order.
pub fn run(config: &BenchConfig, raw: &[i32]) -> Vec<i32> {
    let capacity = config.queue_capacity.max(1);
    let (extract_tx, extract_rx) = bounded::<i32>(capacity);
    let (transform_tx, transform_rx) = bounded::<i32>(capacity);

    thread::scope(|s| {
        s.spawn(move || {
            for &value in raw {
                if extract_tx.send(value).is_err() {
                    // downstream hung up
                    break;
                }
            }
        });

        s.spawn(move || {
            for value in extract_rx {
                if transform_tx.send(value * 2).is_err() {
                    break;
                }
            }
        });

        let filter = s.spawn(move || {
            transform_rx
                .into_iter()
                .filter(|v| v % 3 == 0)
                .collect::<Vec<i32>>()
        });

        filter.join().unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::sequential;

    fn config_with_capacity(queue_capacity: usize) -> BenchConfig {
        BenchConfig {
            queue_capacity,
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_preserves_source_order() {
        let config = config_with_capacity(16);
        assert_eq!(run(&config, &[3, 4, 6, 7, 9]), vec![6, 12, 18]);
    }

    #[test]
    fn test_backpressure_with_tiny_queues_still_completes() {
        // Capacity far below the element count forces every send to wait on
        // the consumer at some point.
        let config = config_with_capacity(4);
        let raw: Vec<i32> = (0..5_000).map(|i| (i % 99) + 1).collect();
        assert_eq!(run(&config, &raw), sequential::run(&config, &raw));
    }

    #[test]
    fn test_empty_input_closes_cleanly() {
        let config = config_with_capacity(4);
        assert!(run(&config, &[]).is_empty());
    }
}
