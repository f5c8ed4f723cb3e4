//! Sprite filename slugs derived from creature names

/// Slug used for the first sprite load attempt
///
/// Lowercases the name, collapses each whitespace run into one hyphen and
/// drops apostrophes and periods.
pub fn primary_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        match c {
            '\'' | '.' => {}
            _ => slug.extend(c.to_lowercase()),
        }
    }

    slug
}

/// Slug used after the primary sprite failed to load
///
/// Same as [`primary_slug`], then maps the gender symbols to `-f`/`-m` and
/// drops colons.
pub fn alternate_slug(name: &str) -> String {
    let mut slug = String::new();
    for c in primary_slug(name).chars() {
        match c {
            '♀' => slug.push_str("-f"),
            '♂' => slug.push_str("-m"),
            ':' => {}
            _ => slug.push(c),
        }
    }
    slug
}
