//! Test fixtures - reusable catalog scripts.

/// A small library: one work of each kind, three readers, ratings on most
/// readings. "Emma" is read most, "Automate the Boring Stuff" rates highest,
/// Ana is the most positive reader.
pub const LIBRARY_TOML: &str = r#"
[[works]]
title = "Automate the Boring Stuff"
catalog_id = 111
subject = "Programming"
level = "Beginner"

[[works]]
title = "Dune"
catalog_id = 222
author = "Frank Herbert"

[[works]]
title = "Emma"
catalog_id = 333

[[readers]]
name = "Ana"
contact = "ana@test.com"

[[readers]]
name = "Bo"
contact = "bo@school.edu"
works = [333]

[[readers]]
name = "Cy"
contact = "cy@club.org"

[[readings]]
catalog_id = 111
contact = "ana@test.com"
rating = 4

[[readings]]
catalog_id = 333
contact = "ana@test.com"
rating = 3

[[readings]]
catalog_id = 222
contact = "bo@school.edu"
rating = 2

[[readings]]
catalog_id = 333
contact = "cy@club.org"
rating = 1
"#;

/// Same library as JSON, minus the readings
pub const LIBRARY_JSON: &str = r#"{
  "works": [
    {"title": "Dune", "catalog_id": "222", "author": "Frank Herbert"},
    {"title": "Emma", "catalog_id": 333}
  ],
  "readers": [
    {"name": "Ana", "contact": "ana@test.com", "works": ["222", 333]}
  ]
}"#;

/// Same library as YAML, with a rating given as text
pub const LIBRARY_YAML: &str = r#"
works:
  - title: Dune
    catalog_id: 222
    author: Frank Herbert
readers:
  - name: Ana
    contact: ana@test.com
readings:
  - catalog_id: 222
    contact: ana@test.com
    rating: "3.5"
"#;

/// Entries the registry refuses: a bad contact, a duplicate catalog id,
/// a reading for nobody, and an out-of-range rating
pub const TROUBLED_TOML: &str = r#"
[[works]]
title = "Dune"
catalog_id = "1"

[[works]]
title = "Emma"
catalog_id = "1"

[[readers]]
name = "Ana"
contact = "ana@test.com"

[[readers]]
name = "Bo"
contact = "bo-at-nowhere"

[[readings]]
catalog_id = "1"
contact = "ana@test.com"
rating = 7

[[readings]]
catalog_id = "1"
contact = "ghost@test.com"
"#;
