//! Page rendering module
//!
//! Builds the HTML for the content page and the QR display page.
//! Fetched text is escaped before it is embedded; raw markup only appears
//! where the templates themselves put it.

/// Escape a string for embedding in HTML text or attribute context
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prepare fetched text for the content page
///
/// Escapes the text, then converts newlines to `<br>` so plain-text
/// documents keep their line structure. `\r\n` is normalized first.
pub fn format_content(text: &str) -> String {
    escape_html(text).replace("\r\n", "\n").replace('\n', "<br>")
}

/// Render the content page
///
/// `text_html` must already be escaped (see [`format_content`]).
/// The image carries an `onerror` handler that hides the broken image and
/// reveals the warning paragraph; image failure is only detectable
/// client-side.
pub fn content_page(text_html: &str, image_url: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QR Code Content</title>
    <style>
        body {{ font-family: sans-serif; text-align: center; margin: 20px; padding: 20px; background-color: #e9e9e9; color: #333; }}
        h1 {{ color: #2a2a2a; margin-bottom: 30px; }}
        img.content-image {{ max-width: 90%; height: auto; border: 2px solid #5cb85c; border-radius: 8px; box-shadow: 0 4px 8px rgba(0,0,0,0.15); margin: 0 auto 30px auto; display: block; }}
        p.content-text {{ font-size: 1.1em; line-height: 1.6; max-width: 600px; margin: 0 auto 20px auto; padding: 20px; border: 1px solid #ccc; border-radius: 8px; background-color: white; box-shadow: 0 2px 4px rgba(0,0,0,0.1); text-align: left; word-wrap: break-word; }}
        footer {{ margin-top: 40px; font-size: 0.9em; color: #777; }}
        .error {{ color: #d9534f; font-weight: bold; margin: 20px auto; max-width: 600px; padding: 15px; background-color: #f8d7da; border: 1px solid #f5c6cb; border-radius: 5px; }}
    </style>
</head>
<body>
    <h1>Your Custom Content</h1>

    <img class="content-image" src="{image_src}" alt="Custom content image"
     onerror="this.style.display='none'; document.getElementById('error-msg').style.display='block';">

    <p id="error-msg" class="error" style="display:none;">
        Image failed to load. Please check sharing settings on the hosting side.
    </p>

    <p class="content-text">{text_html}</p>

    <footer>
        <p>Content fetched from a remote document link</p>
    </footer>
</body>
</html>"#,
        image_src = escape_html(image_url),
        text_html = text_html,
    )
}

/// Render the QR display page
///
/// Static page; the `<img>` points at the PNG route so the browser fetches
/// a freshly encoded symbol.
pub fn qr_page() -> String {
    String::from(
        r#"<!doctype html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QR Code Generator</title>
    <style>
        body { font-family: sans-serif; text-align: center; margin-top: 50px; background-color: #f4f4f4; }
        img.qr-display { max-width: 300px; height: auto; border: 1px solid #ddd; padding: 10px; background-color: white; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
        p { color: #555; margin: 20px auto; max-width: 600px; }
        h1 { color: #333; }
        .note { margin: 20px auto; font-style: italic; color: #777; font-size: 0.9em; max-width: 600px; padding: 15px; background-color: #d9edf7; border: 1px solid #bce8f1; border-radius: 5px; }
    </style>
</head>
<body>
    <h1>Scan this QR Code</h1>
    <img class="qr-display" src="/generate_qr" alt="QR Code">
    <p>Scan the QR code to view the content page with image and text from the remote document links.</p>
    <div class="note">
        <p><strong>Important:</strong> Make sure the linked files are shared with "Anyone with the link".</p>
    </div>
</body>
</html>"#,
    )
}
