use chrono::{Datelike, Local};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::header::{HeaderNav, SCROLL_THRESHOLD_PX};
use super::layout::{LayoutShell, ScrollDirective, ANCHOR_SCROLL_DELAY};
use super::nav::{mobile_entries, NAV_LINKS, PRIMARY_CTA};
use crate::catalog::{CAREERS_EMAIL, COMPANY_NAME, CONTACT_EMAIL};
use crate::routing::PageId;

const STYLE: &str = r#"
:root{--bg:#fff;--fg:#0f172a;--muted:#64748b;--accent:#0ea5e9;--border:#e2e8f0}
*{box-sizing:border-box}body{margin:0;font-family:system-ui,sans-serif;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;overflow-x:hidden}
.site-header{position:fixed;top:0;left:0;right:0;z-index:50;transition:all .3s;background:transparent}
.site-header.scrolled{background:rgba(255,255,255,.95);backdrop-filter:blur(12px);box-shadow:0 1px 2px rgba(0,0,0,.06);border-bottom:1px solid var(--border)}
.nav{display:flex;align-items:center;justify-content:space-between;height:5rem;max-width:72rem;margin:0 auto;padding:0 1rem}
.nav-item{position:relative}.nav-item>a{padding:.5rem .75rem;text-decoration:none;color:inherit}.nav-item>a.active{color:var(--accent)}
.dropdown{position:absolute;top:100%;left:0;padding-top:.5rem;display:none}.nav-item.open .dropdown{display:block}
.dropdown a{display:block;padding:.5rem 1rem;min-width:12rem;background:#fff;text-decoration:none;color:inherit}
.mobile-panel[hidden]{display:none}.mobile-panel a.depth-1{padding-left:1rem;font-size:.875rem;color:var(--muted)}
main{flex:1;padding-top:5rem}section{padding:4rem 1rem;max-width:72rem;margin:0 auto}
.toast{position:fixed;bottom:1.5rem;right:1.5rem;padding:1rem 1.25rem;border-radius:.5rem;color:#fff}
.toast.success{background:#16a34a}.toast.error{background:#dc2626}
.loader{display:flex;align-items:center;justify-content:center;min-height:100vh}
.spinner{width:3rem;height:3rem;border-radius:9999px;border-bottom:2px solid var(--accent);animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
"#;

// Mirrors `HeaderNav` and `LayoutShell::settle` in the browser.
const SCRIPT: &str = r#"
(function(){
  var body=document.body,header=document.querySelector('[data-header]');
  var threshold=Number(body.dataset.scrollThreshold),delay=Number(body.dataset.anchorDelayMs);
  function onScroll(){header.classList.toggle('scrolled',window.scrollY>threshold);}
  window.addEventListener('scroll',onScroll);onScroll();
  window.addEventListener('pagehide',function(){window.removeEventListener('scroll',onScroll);});
  var anchor=window.location.hash?window.location.hash.slice(1):body.dataset.anchor;
  if(anchor){setTimeout(function(){var el=document.getElementById(anchor);if(el){el.scrollIntoView({behavior:'smooth'});}},delay);}
  else{window.scrollTo(0,0);}
  document.querySelectorAll('[data-dropdown]').forEach(function(item){
    item.addEventListener('mouseenter',function(){item.classList.add('open');});
    item.addEventListener('mouseleave',function(){item.classList.remove('open');});
  });
  var toggle=document.querySelector('[data-mobile-toggle]'),panel=document.querySelector('[data-mobile-panel]');
  if(toggle&&panel){toggle.addEventListener('click',function(){panel.hidden=!panel.hidden;});}
  document.querySelectorAll('form[data-single-submit]').forEach(function(form){
    form.addEventListener('submit',function(){var b=form.querySelector('[type=submit]');if(b){b.disabled=true;}});
  });
  document.querySelectorAll('[data-toast]').forEach(function(t){
    setTimeout(function(){t.remove();},Number(t.dataset.durationMs));
  });
  document.querySelectorAll('input[type=file][data-max-bytes]').forEach(function(input){
    input.addEventListener('change',function(){
      var file=input.files&&input.files[0];
      if(!file||file.size<=Number(input.dataset.maxBytes)){return;}
      input.value='';
      var t=document.createElement('div');
      t.className='toast error';t.setAttribute('role','status');t.textContent=input.dataset.sizeError;
      document.body.appendChild(t);
      setTimeout(function(){t.remove();},Number(input.dataset.toastMs));
    });
  });
  var loading=document.querySelector('[data-reload-ms]');
  if(loading){setTimeout(function(){window.location.reload();},Number(loading.dataset.reloadMs));}
})();
"#;

/// Full HTML document: header, the page content slot, and footer.
pub fn render_document(
    shell: &LayoutShell,
    page: PageId,
    directive: &ScrollDirective,
    content: Markup,
) -> Markup {
    let current_path = shell.location().map(|location| location.path()).unwrap_or("/");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title()) }
                style { (PreEscaped(STYLE)) }
            }
            body
                data-page=(format!("{page:?}"))
                data-scroll-threshold=(SCROLL_THRESHOLD_PX)
                data-anchor-delay-ms=(ANCHOR_SCROLL_DELAY.as_millis())
                data-anchor=[directive.anchor()]
            {
                (render_header(shell.header(), current_path))
                main { (content) }
                (render_footer())
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn render_header(header: &HeaderNav, current_path: &str) -> Markup {
    let header_class = if header.is_scrolled() {
        "site-header scrolled"
    } else {
        "site-header"
    };

    html! {
        header class=(header_class) data-header {
            nav class="nav" {
                a href="/" class="logo" { (COMPANY_NAME) }
                div class="nav-links" {
                    @for link in &NAV_LINKS {
                        @let open = header.active_dropdown() == Some(link.label);
                        div class=(if open { "nav-item open" } else { "nav-item" })
                            data-dropdown[link.has_dropdown()]
                        {
                            a href=(link.href) class=[current_path.eq_ignore_ascii_case(link.href).then_some("active")] {
                                (link.label)
                            }
                            @if link.has_dropdown() {
                                div class="dropdown" {
                                    @for child in link.children {
                                        a href=(child.href) { (child.label) }
                                    }
                                }
                            }
                        }
                    }
                }
                a href=(PRIMARY_CTA.href) class="cta" { (PRIMARY_CTA.label) }
                button type="button" class="mobile-toggle" data-mobile-toggle
                    aria-expanded=(header.is_mobile_open()) { "Menu" }
            }
            div class="mobile-panel" data-mobile-panel hidden[!header.is_mobile_open()] {
                @for entry in mobile_entries() {
                    a href=(entry.href) class=(format!("depth-{}", entry.depth)) { (entry.label) }
                }
                a href=(PRIMARY_CTA.href) class="cta" { (PRIMARY_CTA.label) }
            }
        }
    }
}

fn render_footer() -> Markup {
    let year = Local::now().year();
    html! {
        footer class="site-footer" {
            div class="footer-grid" {
                div {
                    strong { (COMPANY_NAME) }
                    p { "MSME-registered software company building HR and healthcare SaaS from Hyderabad." }
                }
                div {
                    h4 { "Products" }
                    a href="/products/vorn-hr" { "VORN HR" }
                    a href="/products/vorqard" { "VorQard" }
                }
                div {
                    h4 { "Company" }
                    a href="/about" { "About" }
                    a href="/projects" { "Projects" }
                    a href="/careers" { "Careers" }
                }
                div {
                    h4 { "Contact" }
                    a href=(format!("mailto:{CONTACT_EMAIL}")) { (CONTACT_EMAIL) }
                    a href=(format!("mailto:{CAREERS_EMAIL}")) { (CAREERS_EMAIL) }
                }
            }
            p class="copyright" { "© " (year) " " (COMPANY_NAME) ". All rights reserved." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Location;

    #[test]
    fn document_carries_scroll_contract_and_closed_menus() {
        let mut shell = LayoutShell::new();
        shell.header_mut().toggle_mobile();
        let directive = shell.navigate(Location::parse("/careers#apply"));
        let html = render_document(&shell, PageId::Careers, &directive, html! { p { "body" } })
            .into_string();

        assert!(html.contains(r#"data-scroll-threshold="10""#));
        assert!(html.contains(r#"data-anchor-delay-ms="100""#));
        assert!(html.contains(r#"data-anchor="apply""#));
        assert!(html.contains("data-mobile-panel hidden"));
        assert!(!html.contains("nav-item open"));
        assert!(html.contains(r#"<a href="/careers" class="active">"#));
        assert!(html.contains("input[type=file][data-max-bytes]"));
    }

    #[test]
    fn active_link_ignores_path_case() {
        let mut shell = LayoutShell::new();
        let directive = shell.navigate(Location::parse("/About"));
        let html =
            render_document(&shell, PageId::About, &directive, html! {}).into_string();
        assert!(html.contains(r#"<a href="/about" class="active">"#));
    }

    #[test]
    fn top_directive_omits_anchor() {
        let mut shell = LayoutShell::new();
        let directive = shell.navigate(Location::parse("/"));
        let html =
            render_document(&shell, PageId::Home, &directive, html! {}).into_string();
        assert!(!html.contains("data-anchor="));
    }
}
