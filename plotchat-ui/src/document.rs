//! Plot Document
//!
//! Wraps the fragment returned by the plot service into a full page whose
//! styles stretch the figure over the whole frame.

/// Sizing rules for the page and the Plotly containers
const PLOT_STYLE: &str = "\
html, body {
  margin: 0;
  padding: 0;
  width: 100vw;
  height: 100vh;
  min-width: 100vw;
  min-height: 100vh;
  box-sizing: border-box;
  background-color: transparent !important;
}
.plotly, .js-plotly-plot, .main-svg, .svg-container, .plot-container {
  width: 100vw !important;
  height: 100vh !important;
  min-width: 100vw !important;
  min-height: 100vh !important;
}
.js-plotly-plot, .plot-container, .svg-container {
  background: transparent !important;
}
body > div { box-sizing: border-box; }
";

/// Build the `srcdoc` page for a plot fragment
pub fn plot_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        PLOT_STYLE, fragment
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_is_embedded_in_body() {
        let doc = plot_document("<div class=\"plotly\" id=\"fig\"></div>");
        assert!(doc.starts_with("<!DOCTYPE html>"));

        let body_start = doc.find("<body>").unwrap();
        let fragment_at = doc.find("<div class=\"plotly\" id=\"fig\"></div>").unwrap();
        assert!(fragment_at > body_start);
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_plot_containers_fill_viewport() {
        let doc = plot_document("<div></div>");
        assert!(doc.contains(".js-plotly-plot"));
        assert!(doc.contains(".svg-container"));
        assert!(doc.contains("height: 100vh !important"));
        assert!(doc.contains("name=\"viewport\""));
    }
}
