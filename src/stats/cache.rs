//! Lebenszyklus des Statistik-Caches eines View-Layers.

use crate::core::ViewLayer;
use crate::shared::StatsCache;

/// Liefert den gecachten Info-String oder berechnet ihn einmalig neu.
///
/// `recompute` läuft nur bei leerem Cache; danach zählt `stats_generation` hoch.
pub(crate) fn cached_or_recompute<F>(view_layer: &mut ViewLayer, recompute: F) -> &str
where
    F: FnOnce(&ViewLayer) -> StatsCache,
{
    let cache = match view_layer.stats.take() {
        Some(cache) => cache,
        None => {
            let cache = recompute(&*view_layer);
            view_layer.stats_generation += 1;
            log::debug!(
                "View-Layer '{}': Statistik neu berechnet (Generation {})",
                view_layer.name,
                view_layer.stats_generation
            );
            cache
        }
    };
    view_layer.stats.insert(cache).info.as_str()
}

/// Verwirft den Cache bedingungslos
pub(crate) fn invalidate(view_layer: &mut ViewLayer) {
    if view_layer.stats.is_some() {
        log::trace!("View-Layer '{}': Statistik verworfen", view_layer.name);
    }
    view_layer.clear_stats();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SceneStats;

    fn entry(info: &str) -> StatsCache {
        StatsCache {
            stats: SceneStats::default(),
            info: info.to_string(),
        }
    }

    #[test]
    fn test_recompute_runs_once_until_invalidated() {
        let mut layer = ViewLayer::new("View Layer");
        let mut calls = 0;

        assert_eq!(
            cached_or_recompute(&mut layer, |_| {
                calls += 1;
                entry("first")
            }),
            "first"
        );
        assert_eq!(
            cached_or_recompute(&mut layer, |_| {
                calls += 1;
                entry("second")
            }),
            "first"
        );
        assert_eq!(calls, 1);
        assert_eq!(layer.stats_generation(), 1);

        invalidate(&mut layer);
        assert!(layer.stats().is_none());
        assert_eq!(cached_or_recompute(&mut layer, |_| entry("third")), "third");
        assert_eq!(layer.stats_generation(), 2);
    }

    #[test]
    fn test_invalidate_on_empty_cache_is_noop() {
        let mut layer = ViewLayer::new("View Layer");
        invalidate(&mut layer);
        assert!(layer.cached_info().is_none());
        assert_eq!(layer.stats_generation(), 0);
    }
}
