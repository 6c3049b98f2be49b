// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-page HTML report of rendered colorbars.

/// One rendered guide with a caption.
#[derive(Debug)]
pub(crate) struct Section {
    pub(crate) caption: String,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{title}</title>"));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2em}\
         .grid{display:flex;flex-wrap:wrap;gap:1.5em}\
         figure{margin:0;padding:.5em;border:1px solid #ddd}\
         figcaption{font-size:12px;color:#555;margin-top:.4em}</style>",
    );
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n<div class=\"grid\">\n"));
    for section in sections {
        out.push_str("<figure>\n");
        out.push_str(&section.svg);
        out.push_str(&format!("<figcaption>{}</figcaption>\n", section.caption));
        out.push_str("</figure>\n");
    }
    out.push_str("</div>\n</body></html>\n");
    out
}
