use crate::models::{FormDefaults, Period};
use crate::views::escape_html;

fn period_options(selected: Period) -> String {
    Period::ALL
        .iter()
        .map(|p| {
            let marker = if *p == selected { " selected" } else { "" };
            format!(r#"<option value="{}"{}>{}</option>"#, p, marker, p.label())
        })
        .collect::<Vec<_>>()
        .join("\n                    ")
}

/// Full dashboard page. `initial` is the pre-rendered output container body.
pub fn render_page(defaults: &FormDefaults, initial: &str) -> String {
    format!(r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Stock Tracker</title>
    <style>
        body {{
            background: #eef1f6;
            margin: 0;
        }}
        .page {{
            background-color: #f7f9fc;
            font-family: Arial, sans-serif;
            padding: 20px;
            max-width: 800px;
            margin: 20px auto;
            border-radius: 10px;
            box-shadow: 0px 4px 10px rgba(0, 0, 0, 0.1);
        }}
        h1 {{
            text-align: center;
            color: #007BFF;
            margin-bottom: 30px;
        }}
        .field {{ margin-bottom: 20px; }}
        label {{
            font-size: 16px;
            font-weight: bold;
            color: #333;
        }}
        input, select {{
            box-sizing: border-box;
            width: 100%;
            padding: 10px;
            font-size: 16px;
            margin-top: 10px;
            border: 1px solid #ccc;
            border-radius: 5px;
        }}
        #stock-graph-container {{
            background-color: #ffffff;
            padding: 15px;
            border-radius: 10px;
            box-shadow: 0px 4px 10px rgba(0, 0, 0, 0.1);
        }}
        #stock-graph-container svg {{ width: 100%; height: auto; }}
        .message {{ text-align: center; padding: 20px; }}
        .message-neutral {{ color: #888; }}
        .message-error {{ color: red; }}
    </style>
</head>
<body>
    <div class="page">
        <h1>Stock Tracker</h1>
        <div class="field">
            <label for="stock-ticker-input">Enter Stock Ticker:</label>
            <input id="stock-ticker-input" type="text" value="{ticker}" placeholder="{placeholder}" autocomplete="off">
        </div>
        <div class="field">
            <label for="timeline-dropdown">Select Timeline:</label>
            <select id="timeline-dropdown">
                    {options}
            </select>
        </div>
        <div id="stock-graph-container">{initial}</div>
    </div>
    <script>
        const input = document.getElementById('stock-ticker-input');
        const select = document.getElementById('timeline-dropdown');
        const container = document.getElementById('stock-graph-container');
        const TYPING_PAUSE_MS = 500;

        let latest = 0;
        let lastKey = input.value + '|' + select.value;
        let timer = null;

        // Responses from superseded requests are dropped
        async function refresh() {{
            clearTimeout(timer);
            const key = input.value + '|' + select.value;
            if (key === lastKey) return;
            lastKey = key;

            const seq = ++latest;
            const params = new URLSearchParams({{ ticker: input.value, period: select.value }});
            try {{
                const resp = await fetch('/view?' + params.toString());
                const html = await resp.text();
                if (seq === latest) container.innerHTML = html;
            }} catch (err) {{
                if (seq !== latest) return;
                const div = document.createElement('div');
                div.className = 'message message-error';
                div.textContent = 'An error occurred: ' + err.message;
                container.replaceChildren(div);
            }}
        }}

        input.addEventListener('input', () => {{
            clearTimeout(timer);
            timer = setTimeout(refresh, TYPING_PAUSE_MS);
        }});
        input.addEventListener('change', refresh);
        select.addEventListener('change', refresh);
    </script>
</body>
</html>"##,
        ticker = escape_html(defaults.ticker),
        placeholder = escape_html(defaults.placeholder),
        options = period_options(defaults.period),
        initial = initial,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_form_defaults() {
        let html = render_page(&FormDefaults::default(), "<div>initial</div>");

        assert!(html.contains(r#"value="GOOGL""#));
        assert!(html.contains(r#"placeholder="e.g., AAPL, TSLA, MSFT""#));
        assert!(html.contains(r#"<option value="1y" selected>Last 1 Year</option>"#));
        assert!(html.contains(r#"<div id="stock-graph-container"><div>initial</div></div>"#));
    }

    #[test]
    fn test_all_periods_offered_once() {
        let options = period_options(Period::Max);
        assert_eq!(options.matches("<option").count(), 6);
        assert_eq!(options.matches(" selected").count(), 1);
        assert!(options.contains(r#"<option value="max" selected>Max Available</option>"#));
        assert!(options.contains(r#"<option value="3mo">Last 3 Months</option>"#));
    }
}
