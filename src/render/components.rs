//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages. All dynamic values pass through maud and are escaped.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Flat layout, warm accent. Uses spacing and subtle background shifts for
/// hierarchy rather than borders and shadows.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fbf9f6;--fg:#1c1917;--fg2:#57534e;--fg3:#a8a29e;--accent:#c2410c;--accent-hover:#9a3412;--ok:#15803d;--err:#b91c1c;--surface:#fff;--border:rgba(194,65,12,.18)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}

.topbar{width:100%;max-width:720px;display:flex;align-items:center;justify-content:space-between;margin-bottom:1.5rem}
.brand{font-size:1.35rem;font-weight:800;letter-spacing:-.02em;color:var(--fg)}
.topbar nav{display:flex;gap:1rem;font-size:.95rem}

h2{font-size:1.4rem;font-weight:700;letter-spacing:-.01em;margin-bottom:.75rem}
label{display:block;font-size:.85rem;font-weight:600;color:var(--fg2);margin:.75rem 0 .25rem}
input,textarea,select{width:100%;padding:.55rem .7rem;font:inherit;color:var(--fg);background:var(--surface);border:1px solid var(--border);border-radius:6px}
textarea{resize:vertical}
button{margin-top:1rem;padding:.55rem 1.1rem;font:inherit;font-weight:600;color:#fff;background:var(--accent);border:none;border-radius:6px;cursor:pointer}
button:hover{background:var(--accent-hover)}
.form-row{display:grid;grid-template-columns:1fr 1fr;gap:1rem}

#recipeResult{margin-top:2rem}
#recipeResult.hidden{display:none}
.loading{text-align:center;padding:2rem 0;color:var(--fg3)}

.recipe-card{padding:1.5rem;background:var(--surface);border:1px solid var(--border);border-radius:10px}
.recipe-card h3{font-size:1.5rem;font-weight:700;letter-spacing:-.01em;margin-bottom:1rem}
.recipe-layout{display:flex;gap:1.5rem;flex-wrap:wrap}
.recipe-media{flex:1 1 200px}
.recipe-media img{width:100%;border-radius:8px;object-fit:cover;aspect-ratio:4/3}
.recipe-meta{display:flex;justify-content:space-between;margin-top:.5rem;font-size:.85rem;color:var(--fg2)}
.recipe-source{margin-top:.35rem;font-size:.8rem;color:var(--fg3)}
.recipe-body{flex:2 1 320px}
.recipe-body h4{font-size:1.05rem;font-weight:600;margin:.75rem 0 .35rem}
.recipe-body ul{list-style:disc;padding-left:1.25rem}
.recipe-body ol{list-style:decimal;padding-left:1.25rem}
.recipe-body li{margin:.2rem 0}
.nutrition-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(110px,1fr));gap:.6rem;margin-top:.5rem}
.nutrition-cell{background:var(--bg);padding:.5rem;border-radius:6px;text-align:center}
.nutrition-value{font-weight:600}
.nutrition-label{font-size:.75rem;color:var(--fg3)}
.save-form{margin-top:1.25rem;display:flex;justify-content:flex-end}

.notice{padding:.7rem 1rem;border-radius:6px;margin-bottom:1rem;font-size:.95rem}
.notice-success{background:#f0fdf4;color:var(--ok);border:1px solid #bbf7d0}
.notice-error{background:#fef2f2;color:var(--err);border:1px solid #fecaca}
.error-block{background:#fef2f2;border-left:4px solid var(--err);color:var(--err);padding:1rem;border-radius:4px}

.notice-page{text-align:center;padding:2rem 0}
.notice-page .notice{display:inline-block}
.notice-page a{display:block;margin-top:1rem}

.footer{text-align:center;margin-top:1.5rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);width:100%;max-width:720px}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fbf9f6;color:#1c1917;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#57534e;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#c2410c}
"#;

/// Inline script attached to the generator form's `onsubmit`.
///
/// Swaps the loading placeholder into the result container synchronously,
/// before the browser navigates for the response.
pub const LOADING_SCRIPT: &str = "var r=document.getElementById('recipeResult');if(r){r.classList.remove('hidden');r.innerHTML='<div class=\"loading\"><p>Generating your recipe...</p></div>';}";

/// Render the full HTML page shell with `<head>`, top navigation, and footer.
pub fn page_shell(title: &str, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="topbar" {
                    a class="brand" href="/" { (site_name) }
                    nav {
                        a href="/" { "Generator" }
                        a href="/contact" { "Contact" }
                    }
                }
                main { (body_content) }
                footer class="footer" {
                    "Powered by " (site_name)
                }
            }
        }
    }
}

/// Render a success or error notice line.
pub fn notice(kind: NoticeKind, message: &str) -> Markup {
    let class = match kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };
    html! {
        div class=(class) role="status" { (message) }
    }
}

/// Notice flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Render the inline error block shown in the result container when
/// generation fails.
pub fn error_block(message: &str) -> Markup {
    html! {
        div class="error-block" role="alert" {
            p { "Error generating recipe: " (message) }
        }
    }
}

/// Check if a URL is safe to use in `src` or `href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
