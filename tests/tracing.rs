//! Manual trace-output inspection: run with `cargo test --test tracing --
//! --ignored --nocapture` to see trace/warn output on stderr.

use css_syntax::parser_config::{Context, ParserConfig};
use css_syntax::{parse_a_stylesheet_with, LoggingSink};
use simple_logger::SimpleLogger;

#[test]
#[ignore]
fn logs_trace_and_warn_output_with_simple_logger() {
    SimpleLogger::new().init().unwrap();

    let config = ParserConfig { source: Some("inline test input".into()), ..ParserConfig::new(Context::Stylesheet) };
    let mut sink = LoggingSink;
    let sheet = parse_a_stylesheet_with("a { color: ; } @media {", &mut sink, config);
    println!("{sheet:?}");
}
