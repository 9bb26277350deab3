use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use nt_core::{Article, Bucket, GroupedArticles, TimeUnit};

/// Group articles by how long ago they were published, relative to now.
pub fn group_by_interval(
    articles: Vec<Article>,
    interval: NonZeroU32,
    unit: TimeUnit,
) -> GroupedArticles {
    group_at(articles, interval, unit, Utc::now())
}

/// Group articles into buckets `interval` units wide, measured back from `now`.
///
/// Bucket `i` covers elapsed times in `(i * width, (i + 1) * width]` and is
/// labelled `"<(i + 1) * interval> <unit> ago"`. Articles from the future
/// land in the first bucket.
pub fn group_at(
    articles: Vec<Article>,
    interval: NonZeroU32,
    unit: TimeUnit,
    now: DateTime<Utc>,
) -> GroupedArticles {
    let width_ms = i128::from(unit.seconds()) * 1000 * i128::from(interval.get());
    let mut grouped = GroupedArticles::new();

    for article in articles {
        let elapsed_ms = i128::from((now - article.published_at()).num_milliseconds()).max(0);
        let label = bucket_label(bucket_index(elapsed_ms, width_ms), interval, unit);
        grouped
            .entry(label.clone())
            .or_insert_with(|| Bucket::new(label))
            .push(article);
    }

    grouped
}

fn bucket_index(elapsed_ms: i128, width_ms: i128) -> i128 {
    if elapsed_ms == 0 {
        0
    } else {
        (elapsed_ms - 1) / width_ms
    }
}

fn bucket_label(index: i128, interval: NonZeroU32, unit: TimeUnit) -> String {
    format!("{} {} ago", (index + 1) * i128::from(interval.get()), unit)
}
