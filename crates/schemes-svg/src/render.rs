//! Scheme renderer — [`Scheme`] in, SVG document out.
//!
//! The output is always the same fixed template: a 288×140 canvas, a
//! `<style>` block with one `#cN { fill: #RRGGBB; }` rule per role, and a
//! short code snippet whose spans reference those ids so the file previews
//! the scheme when opened in any SVG viewer.

use std::fmt::{self, Write};

use crate::role::Role;
use crate::scheme::Scheme;

const HEADER: &str = r#"<svg width="288px" height="140px" xmlns="http://www.w3.org/2000/svg" baseProfile="full" version="1.1">"#;

/// The preview body, painted with the scheme's own rules.
const PREVIEW: &str = r##"
   <!-- Language Preview -->
   <rect width="288px" height="140px" rx="10px" id="c0"></rect>
   <text style="font-family:ui-monospace,monospace;font-size: 12px;font-weight:400;" id="c1"><tspan x="5px" y="19px"><tspan id="c5">import</tspan> <tspan id="c3">"fmt"</tspan></tspan><tspan x="19px" y="33px"></tspan><tspan x="5px" y="47px"><tspan id="c3">type</tspan> Point <tspan id="c2">struct</tspan> {</tspan><tspan x="19px" y="61px">X, Y <tspan id="c2">float32</tspan></tspan><tspan x="5px" y="75px">}</tspan><tspan x="5px" y="89px"><tspan id="c3">func</tspan> <tspan id="c3">main</tspan>() {</tspan><tspan x="19px" y="103px">p := Point{ <tspan id="c6" style="text-decoration: underline wavy">x</tspan>: <tspan id="c3">10</tspan>, Y: <tspan id="c3">30</tspan> }</tspan><tspan x="19px" y="117px">fmt.printf(<tspan id="c3">"Point %<tspan id="c5">\n</tspan>"</tspan>, p)</tspan><tspan x="5px" y="131px">} <tspan id="c7">// This is a comment</tspan></tspan></text>
</svg>
"##;

/// Render a scheme as a complete SVG document.
///
/// Colors are always written as uppercase hex, whatever notation they were
/// read in. The title is escaped, so any string survives a round trip.
#[must_use]
pub fn render(scheme: &Scheme) -> String {
    scheme.to_string()
}

fn write_svg(out: &mut impl Write, scheme: &Scheme) -> fmt::Result {
    writeln!(out, "{HEADER}")?;

    out.write_str("   <title>")?;
    svg_escape_into(out, &scheme.title)?;
    writeln!(out, "</title>")?;
    writeln!(out, "   <version>{}</version>", scheme.version)?;

    writeln!(out, "   <style>")?;
    for role in Role::ALL {
        writeln!(
            out,
            "      #{} {{ fill: {}; }} <!-- {} -->",
            role.id(),
            scheme[role],
            role.label()
        )?;
    }
    writeln!(out, "   </style>")?;

    out.write_str(PREVIEW)
}

/// XML-escape text content.
fn svg_escape_into(out: &mut impl Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '&' => out.write_str("&amp;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_svg(f, self)
    }
}
