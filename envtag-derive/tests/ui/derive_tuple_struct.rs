// Tuple fields have no names to report in errors

#![allow(dead_code)]

use envtag::Unmarshal;

#[derive(Unmarshal)]
struct Pair(pub String, pub i64);

fn main() {}
