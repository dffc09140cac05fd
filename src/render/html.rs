//! Markup for table rows, placeholder rows and the full page.

use super::display::PageState;
use super::view::RowView;
use std::time::Duration;

pub const COLUMNS: usize = 8;
pub const LOADING_MESSAGE: &str = "새로고침 중...";
pub const NO_DATA_MESSAGE: &str = "조건에 맞는 종목이 없습니다.";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn row_html(row: &RowView) -> String {
    let yield_class = if row.yield_positive {
        "positive"
    } else {
        "negative"
    };
    format!(
        r#"<tr class="{parity}"><td class="rank">{rank}</td><td class="code">{code}</td><td class="name">{name}</td><td class="number">{foreign}</td><td class="number">{institution}</td><td class="number highlight">{total}</td><td class="yield {yield_class}">{yield_text}</td><td class="consecutive">{consecutive}</td></tr>"#,
        parity = row.parity.as_str(),
        rank = html_escape(&row.rank),
        code = html_escape(&row.code),
        name = html_escape(&row.name),
        foreign = row.foreign,
        institution = row.institution,
        total = row.total,
        yield_text = row.yield_text,
        consecutive = html_escape(&row.consecutive),
    )
}

pub fn rows_html(rows: &[RowView]) -> String {
    rows.iter().map(row_html).collect::<Vec<_>>().join("\n")
}

fn message_row(class: &str, text: &str) -> String {
    format!(r#"<tr><td colspan="{COLUMNS}" class="{class}">{text}</td></tr>"#)
}

pub fn loading_row() -> String {
    message_row("loading", LOADING_MESSAGE)
}

pub fn no_data_row() -> String {
    message_row("loading", NO_DATA_MESSAGE)
}

pub fn error_row(message: &str) -> String {
    message_row("error", &format!("❌ {}", html_escape(message)))
}

/// Whole document for the current page state. The browser reloads itself
/// every `reload_every` so timer refreshes show up without user action.
pub fn render_page(state: &PageState, reload_every: Duration) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="refresh" content="{reload}">
    <title>ETF 수급 현황</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>ETF 수급 현황</h1>
            <form method="post" action="/refresh"><button type="submit">새로고침</button></form>
            <p id="lastUpdate">{last_updated}</p>
        </header>
        <section class="stats">
            <div class="stat"><span class="label">종목 수</span><span id="etfCount">{count}</span></div>
            <div class="stat"><span class="label">합계 순매수</span><span id="totalBuy">{total}</span></div>
            <div class="stat"><span class="label">평균 수익률</span><span id="avgYield">{avg_yield}</span></div>
        </section>
        <table>
            <thead>
                <tr><th>순위</th><th>종목코드</th><th>종목명</th><th>외국인</th><th>기관</th><th>합계</th><th>수익률</th><th>연속</th></tr>
            </thead>
            <tbody id="tableBody">
{body}
            </tbody>
        </table>
    </div>
</body>
</html>"#,
        reload = reload_every.as_secs().max(1),
        css = inline_css(),
        last_updated = html_escape(&state.last_updated),
        count = html_escape(&state.stats.count),
        total = html_escape(&state.stats.total),
        avg_yield = html_escape(&state.stats.avg_yield),
        body = state.body,
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: sans-serif; margin: 0; background: #f5f6f8; color: #222; }
.container { max-width: 1100px; margin: 0 auto; padding: 24px; }
.stats { display: flex; gap: 16px; margin: 16px 0; }
.stat { background: #fff; border-radius: 8px; padding: 12px 16px; flex: 1; }
.stat .label { display: block; font-size: 12px; color: #666; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: 8px 10px; border-bottom: 1px solid #eee; }
tr.odd { background: #fafafa; }
td.number { text-align: right; }
td.highlight { font-weight: bold; }
td.positive { color: #d32f2f; }
td.negative { color: #1976d2; }
td.loading, td.error { text-align: center; padding: 32px; color: #888; }
td.error { color: #d32f2f; }
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::view::{Parity, StatsView};
    use scraper::{Html, Selector};

    fn row(name: &str) -> RowView {
        RowView {
            parity: Parity::Odd,
            rank: "2".into(),
            code: "000660".into(),
            name: name.into(),
            foreign: "1,000".into(),
            institution: "-5".into(),
            total: "995".into(),
            yield_text: "-0.50%".into(),
            yield_positive: false,
            consecutive: "1일".into(),
        }
    }

    #[test]
    fn escapes_text() {
        assert_eq!(
            html_escape(r#"<b>"A&B"</b>'"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;&#39;"
        );
    }

    #[test]
    fn row_has_eight_cells_and_classes() {
        let html = row_html(&row("SK"));
        let doc = Html::parse_fragment(&format!("<table><tbody>{html}</tbody></table>"));
        let tr = Selector::parse("tr.odd").unwrap();
        let td = Selector::parse("td").unwrap();
        let yield_td = Selector::parse("td.yield.negative").unwrap();

        let tr = doc.select(&tr).next().expect("row present");
        assert_eq!(tr.select(&td).count(), COLUMNS);
        let y = doc.select(&yield_td).next().expect("yield cell");
        assert_eq!(y.text().collect::<String>(), "-0.50%");
    }

    #[test]
    fn row_does_not_inject_markup() {
        let html = row_html(&row("<script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn placeholder_rows_span_table() {
        assert!(loading_row().contains(r#"colspan="8""#));
        assert!(no_data_row().contains(NO_DATA_MESSAGE));
        assert!(error_row("boom").contains("❌ boom"));
        assert!(error_row("boom").contains(r#"class="error""#));
    }

    #[test]
    fn page_embeds_state() {
        let state = PageState {
            body: no_data_row(),
            stats: StatsView {
                count: "2".into(),
                total: "410".into(),
                avg_yield: "+0.37%".into(),
            },
            last_updated: "마지막 업데이트: 12:00:00".into(),
            rows: Vec::new(),
        };
        let page = render_page(&state, Duration::from_secs(300));
        let doc = Html::parse_document(&page);
        let text_of = |sel: &str| {
            let s = Selector::parse(sel).unwrap();
            doc.select(&s).next().unwrap().text().collect::<String>()
        };
        assert_eq!(text_of("#etfCount"), "2");
        assert_eq!(text_of("#totalBuy"), "410");
        assert_eq!(text_of("#avgYield"), "+0.37%");
        assert_eq!(text_of("#lastUpdate"), "마지막 업데이트: 12:00:00");
        assert!(text_of("#tableBody").contains(NO_DATA_MESSAGE));
        assert!(page.contains(r#"content="300""#));
    }
}
