/// Quotes `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Creates the chart inside `element_id` once the library and the map geometry
/// are available, then reports clicks back through the eval channel.
pub(super) fn init_chart_script(
    element_id: &str,
    echarts_url: &str,
    map_script_url: &str,
    map_name: &str,
) -> String {
    format!(
        r#"const state = window.__mapQuiz || (window.__mapQuiz = {{
                    chart: null,
                    option: null,
                    series: null,
                    resize: null,
                }});
                const elementId = {element_id};
                const mapName = {map_name};
                const loadScript = (src) => new Promise((resolve, reject) => {{
                    const tag = document.createElement("script");
                    tag.src = src;
                    tag.onload = resolve;
                    tag.onerror = () => reject(new Error("failed to load " + src));
                    document.head.appendChild(tag);
                }});
                const waitForElement = () => new Promise((resolve) => {{
                    const poll = () => {{
                        const el = document.getElementById(elementId);
                        if (el) {{
                            resolve(el);
                        }} else {{
                            requestAnimationFrame(poll);
                        }}
                    }};
                    poll();
                }});
                try {{
                    if (!window.echarts) {{
                        await loadScript({echarts_url});
                    }}
                    if (!echarts.getMap(mapName)) {{
                        await loadScript({map_script_url});
                    }}
                    const container = await waitForElement();
                    if (state.resize) {{
                        window.removeEventListener("resize", state.resize);
                        state.resize = null;
                    }}
                    if (state.chart) {{
                        state.chart.dispose();
                    }}
                    const chart = echarts.init(container);
                    state.chart = chart;
                    if (state.option) {{
                        chart.setOption(state.option, true);
                    }}
                    if (state.series) {{
                        chart.setOption({{ series: [{{ data: state.series }}] }});
                    }}
                    chart.on("click", (params) => {{
                        dioxus.send({{ kind: "click", name: String(params.name || "") }});
                    }});
                    state.resize = () => chart.resize();
                    window.addEventListener("resize", state.resize);
                    dioxus.send({{ kind: "ready" }});
                }} catch (err) {{
                    dioxus.send({{ kind: "failed", reason: String(err) }});
                    return;
                }}
                // Keep the channel open for click events.
                await new Promise(() => {{}});"#,
        element_id = js_string(element_id),
        map_name = js_string(map_name),
        echarts_url = js_string(echarts_url),
        map_script_url = js_string(map_script_url),
    )
}

pub(super) fn configure_chart_script(option_json: &str) -> String {
    format!(
        r#"(function() {{
                    const state = window.__mapQuiz || (window.__mapQuiz = {{
                        chart: null,
                        option: null,
                        series: null,
                        resize: null,
                    }});
                    state.option = {option_json};
                    state.series = null;
                    if (state.chart) {{
                        state.chart.setOption(state.option, true);
                    }}
                }})();"#,
    )
}

pub(super) fn update_series_script(series_json: &str) -> String {
    format!(
        r#"(function() {{
                    const state = window.__mapQuiz || (window.__mapQuiz = {{
                        chart: null,
                        option: null,
                        series: null,
                        resize: null,
                    }});
                    state.series = {series_json};
                    if (state.chart) {{
                        state.chart.setOption({{ series: [{{ data: state.series }}] }});
                    }}
                }})();"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_script_quotes_urls_and_map_name() {
        let js = init_chart_script("map-container", "js/echarts.min.js", "js/china.js", "china");
        assert!(js.contains(r#"const elementId = "map-container";"#));
        assert!(js.contains(r#"await loadScript("js/echarts.min.js");"#));
        assert!(js.contains(r#"await loadScript("js/china.js");"#));
        assert!(js.contains(r#"const mapName = "china";"#));
    }

    #[test]
    fn init_script_escapes_quotes_as_json() {
        let js = init_chart_script("map-container", "a.js", "b.js", r#"my "map"\x"#);
        assert!(js.contains(r#"const mapName = "my \"map\"\\x";"#), "{js}");
    }

    #[test]
    fn reinit_removes_previous_resize_listener_before_dispose() {
        let js = init_chart_script("map-container", "a.js", "b.js", "china");
        let remove = js
            .find(r#"window.removeEventListener("resize", state.resize);"#)
            .unwrap();
        let dispose = js.find("state.chart.dispose();").unwrap();
        let add = js
            .find(r#"window.addEventListener("resize", state.resize);"#)
            .unwrap();
        assert!(remove < dispose);
        assert!(dispose < add);
        assert!(!js.contains("() => chart.resize())"));
    }

    #[test]
    fn series_script_embeds_json_verbatim() {
        let js = update_series_script(r#"[{"name":"北京"}]"#);
        assert!(js.contains(r#"state.series = [{"name":"北京"}];"#));
    }
}
