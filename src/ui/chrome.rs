//! Browser chrome: toolbar, address bar and tab strip, rendered in its own webview.
//!
//! The chrome only posts `ShellCommand` JSON over `window.ipc` and repaints
//! itself from the `ChromeState` pushed back by `update_script`.

use crate::types::command::ChromeState;

const CHROME_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,"Segoe UI",Helvetica,Arial,sans-serif;font-size:var(--font-size);
background:var(--toolbar-bg);color:var(--text-color);user-select:none;overflow:hidden}
.tabs{display:flex;gap:4px;padding:6px 10px 0;height:38px;background:var(--window-bg)}
.tab{display:flex;align-items:center;gap:8px;max-width:200px;padding:6px 10px;cursor:pointer;
background:var(--control-bg);border-radius:var(--control-radius) var(--control-radius) 0 0;opacity:.7}
.tab.active{opacity:1;background:var(--toolbar-bg)}
.tab span{overflow:hidden;white-space:nowrap;text-overflow:ellipsis}
.tab .close{border:none;background:none;color:inherit;cursor:pointer}
.toolbar{display:flex;align-items:center;gap:10px;padding:5px 10px;border-bottom:1px solid var(--border-color)}
.toolbar button{border:none;background:var(--control-bg);border-radius:var(--control-radius);
padding:6px 12px;color:var(--text-color);font-size:var(--font-size);cursor:pointer}
.toolbar button:hover{background:var(--control-hover)}
#address{flex:1;border:none;background:var(--control-bg);border-radius:var(--input-radius);
padding:8px;color:var(--text-color);font-size:var(--font-size);outline:none}
#address:focus{background:var(--control-hover)}
"#;

const CHROME_JS: &str = r#"
function send(m){if(window.ipc)window.ipc.postMessage(JSON.stringify(m))}
document.querySelectorAll('[data-cmd]').forEach(function(b){
  b.addEventListener('click',function(){send({cmd:b.dataset.cmd})});
});
var addr=document.getElementById('address');
addr.addEventListener('keydown',function(e){
  if(e.key==='Enter'){send({cmd:'navigate',text:addr.value});addr.blur();}
});
var strip=document.getElementById('tabs');
strip.addEventListener('dblclick',function(e){if(e.target===strip)send({cmd:'new_tab'})});
window.__stark_update=function(state,css){
  document.getElementById('theme').textContent=css;
  if(document.activeElement!==addr)addr.value=state.address;
  strip.innerHTML='';
  state.tabs.forEach(function(t){
    var el=document.createElement('div');
    el.className='tab'+(t.id===state.activeId?' active':'');
    el.title=t.address;
    var label=document.createElement('span');
    label.textContent=t.label;
    var close=document.createElement('button');
    close.className='close';close.textContent='×';
    close.addEventListener('click',function(e){e.stopPropagation();send({cmd:'close_tab',id:t.id})});
    el.appendChild(label);el.appendChild(close);
    el.addEventListener('click',function(){send({cmd:'switch_tab',id:t.id})});
    strip.appendChild(el);
  });
};
send({cmd:'ui_ready'});
"#;

/// Full HTML document for the chrome webview.
pub fn chrome_html(stylesheet: &str) -> String {
    let mut html = String::with_capacity(CHROME_CSS.len() + CHROME_JS.len() + 2048);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style id=\"theme\">");
    html.push_str(stylesheet);
    html.push_str("</style><style>");
    html.push_str(CHROME_CSS);
    html.push_str("</style></head><body>");
    html.push_str("<div class=\"tabs\" id=\"tabs\"></div>");
    html.push_str(
        "<div class=\"toolbar\">\
         <button data-cmd=\"back\" title=\"Back\">Back</button>\
         <button data-cmd=\"forward\" title=\"Forward\">Forward</button>\
         <button data-cmd=\"reload\" title=\"Refresh\">\u{27F3}</button>\
         <button data-cmd=\"home\" title=\"Home\">\u{1F3E0}</button>\
         <button data-cmd=\"add_bookmark\" title=\"Add bookmark\">\u{2606}</button>\
         <button data-cmd=\"show_bookmarks\" title=\"Bookmarks\">\u{2605}</button>\
         <input id=\"address\" type=\"text\" placeholder=\"Search or enter a URL\" spellcheck=\"false\">\
         <button data-cmd=\"new_tab\" title=\"New Tab\">+</button>\
         <button data-cmd=\"open_settings\" title=\"Settings\">\u{2699}</button>\
         </div>",
    );
    html.push_str("<script>");
    html.push_str(CHROME_JS);
    html.push_str("</script></body></html>");
    html
}

/// Script that repaints the chrome from `state` and the current theme stylesheet.
pub fn update_script(state: &ChromeState, stylesheet: &str) -> String {
    let state_json = serde_json::to_string(state).unwrap_or_default();
    let css_json = serde_json::to_string(stylesheet).unwrap_or_default();
    format!(
        "if(window.__stark_update)__stark_update({},{})",
        state_json, css_json
    )
}
