/// Split narration content into `num_demos + 1` roughly equal parts at
/// sentence boundaries, so demo actions can slot between them.
///
/// Always returns exactly `num_demos + 1` entries; trailing entries are
/// empty strings when the content has fewer sentences than slots.
pub fn split_content_for_demos(content: &str, num_demos: usize) -> Vec<String> {
    if num_demos == 0 {
        return vec![content.to_string()];
    }

    let sentences: Vec<&str> = content.split(". ").collect();
    let parts_wanted = num_demos + 1;
    let sentences_per_part = std::cmp::max(1, sentences.len() / parts_wanted);

    let mut parts = Vec::new();
    let mut i = 0;
    while i < sentences.len() {
        let end = std::cmp::min(i + sentences_per_part, sentences.len());
        let part = sentences[i..end].join(". ");
        if !part.trim().is_empty() {
            parts.push(part);
        }
        i = end;
    }

    // Integer division can leave overflow parts; fold them into the last
    // kept part so no sentence is ever dropped.
    if parts.len() > parts_wanted {
        let overflow = parts.split_off(parts_wanted);
        if let Some(last) = parts.last_mut() {
            for extra in overflow {
                last.push_str(". ");
                last.push_str(&extra);
            }
        }
    }

    while parts.len() < parts_wanted {
        parts.push(String::new());
    }
    parts
}
