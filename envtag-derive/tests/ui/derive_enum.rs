// Records are structs; an enum has no fields to tag

#![allow(dead_code)]

use envtag::Unmarshal;

#[derive(Unmarshal)]
enum Mode { Debug, Release }

fn main() {}
