use std::collections::BTreeMap;

use super::model::TagCount;

/// Find vocabulary tags similar to `queries`, most used first.
///
/// With no queries every tag is returned. Otherwise a tag is kept when its
/// lowercase form contains a lowercase query, and it is emitted once for
/// *each* query it matches, so `["go", "rout"]` yields `goroutine` twice.
pub fn tags_like(vocabulary: &BTreeMap<String, u64>, queries: &[String]) -> Vec<TagCount> {
    let mut matches: Vec<TagCount> = if queries.is_empty() {
        vocabulary
            .iter()
            .map(|(tag, count)| TagCount::new(tag.as_str(), *count))
            .collect()
    } else {
        let needles: Vec<String> = queries.iter().map(|q| q.to_lowercase()).collect();
        let mut found = Vec::new();
        for (tag, count) in vocabulary {
            let folded = tag.to_lowercase();
            for needle in &needles {
                if folded.contains(needle.as_str()) {
                    found.push(TagCount::new(tag.as_str(), *count));
                }
            }
        }
        found
    };

    rank_by_count(&mut matches);
    matches
}

/// Sort by count, highest first. Ties keep their existing relative order.
pub fn rank_by_count(tags: &mut [TagCount]) {
    tags.sort_by(|a, b| b.count.cmp(&a.count));
}
