// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::path::PathBuf;

// Records the compiler version, used in the `x-goog-api-client` header.
fn main() {
    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not specified");
    let version = rustc_version::version().expect("could not retrieve rustc version");
    let contents = format!("pub(crate) const RUSTC_VERSION: &str = \"{version}\";\n");
    std::fs::write(PathBuf::from(out_dir).join("build_env.rs"), contents)
        .expect("could not write build_env.rs");
    println!("cargo::rerun-if-changed=build.rs");
}
