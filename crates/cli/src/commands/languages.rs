//! Languages command implementation

use callpath_sdkgen::Language;

/// List the supported target languages with their file naming
pub fn run() -> i32 {
    println!("Supported languages:");
    for language in Language::ALL {
        let target = language.target();
        println!(
            "  {:<12} proxy: {:<16} stub: {}",
            language.name(),
            target.file_path(&target.proxy_module("User")),
            target.file_path(target.stub_module())
        );
    }
    0
}
