//! Drawing: route chrome, stats, filters, and the windowed list slice.

use std::fmt::Write as _;
use std::io;

use unicode_width::UnicodeWidthChar;

use super::{App, HEADER_ROWS};
use crate::routes::Route;
use crate::store::{Category, DesignFilter, PublishItem, Status};
use crate::terminal::Terminal;

impl App {
    pub(super) fn render(&self, term: &Terminal) -> io::Result<()> {
        term.clear()?;
        let cols = usize::from(self.term_size.cols);
        self.draw_nav(term, cols)?;
        if self.route == Route::PublishStatus {
            self.draw_board(term, cols)?;
        } else {
            self.draw_page(term, cols)?;
        }
        self.draw_footer(term, cols)
    }

    fn draw_nav(&self, term: &Terminal, cols: usize) -> io::Result<()> {
        let mut nav = String::new();
        for route in Route::ALL {
            if route == self.route {
                let _ = write!(nav, "[{}]  ", route.title());
            } else {
                let _ = write!(nav, " {}   ", route.title());
            }
        }
        term.print_at(0, 0, &fit_width(&nav, cols))
    }

    fn draw_board(&self, term: &Terminal, cols: usize) -> io::Result<()> {
        let stats = format!(
            "전체 {}  완료 {}  진행중 {}  대기 {}  완료율 {}",
            self.store.total_count(),
            self.store.done_count(),
            self.store.progress_count(),
            self.store.wait_count(),
            self.store.done_rate(),
        );
        term.print_at(0, 1, &fit_width(&stats, cols))?;
        term.print_at(0, 2, &fit_width(&self.filter_line(), cols))?;
        term.print_at(0, 3, &"─".repeat(cols))?;

        if self.grouped_overlay {
            self.draw_groups(term, cols)
        } else {
            self.draw_rows(term, cols)?;
            self.draw_scrollbar(term, cols)
        }
    }

    fn filter_line(&self) -> String {
        let filters = &self.store.filters;
        let keyword = if self.keyword_entry {
            format!("{}_", filters.keyword)
        } else if filters.keyword.is_empty() {
            "-".to_owned()
        } else {
            filters.keyword.clone()
        };
        let design = match filters.has_design {
            DesignFilter::All => "전체",
            DesignFilter::With => "있음",
            DesignFilter::Without => "없음",
        };
        format!(
            "search: {keyword}  status: {}  category: {}  depth1: {}  design: {design}",
            filters.status.map_or("전체", Status::label),
            filters.category.map_or("전체", Category::label),
            filters.depth1.as_deref().unwrap_or("전체"),
        )
    }

    /// Paint the mounted slice: each windowed row lands at its pixel
    /// position relative to the scroll offset, converted to a panel cell
    /// row. Rows scrolled past the panel edges are simply skipped.
    fn draw_rows(&self, term: &Terminal, cols: usize) -> io::Result<()> {
        let window = self.scroll.state();
        let filtered = self.store.filtered();
        let row_height = self.row_height();
        let panel_rows = i32::from(self.list_panel_rows());
        let top_px = window.offset_top - self.viewport.scroll_top();

        let end = window.end.min(filtered.len());
        let start = window.start.min(end);
        for (slot, item) in filtered[start..end].iter().enumerate() {
            let y_px = top_px + slot as f32 * row_height;
            let row = (y_px / row_height).floor() as i32;
            if !(0..panel_rows).contains(&row) {
                continue;
            }
            let line = format_row(item);
            term.print_at(
                0,
                HEADER_ROWS + row as u16,
                &fit_width(&line, cols.saturating_sub(1)),
            )?;
        }
        Ok(())
    }

    fn draw_scrollbar(&self, term: &Terminal, cols: usize) -> io::Result<()> {
        let total = self.scroll.total_height();
        let client = self.viewport.client_height();
        if total <= client || cols == 0 {
            return Ok(());
        }
        let panel_rows = self.list_panel_rows();
        let track = f32::from(panel_rows);
        let thumb_len = (client / total * track).ceil().max(1.0);
        let thumb_top = (self.viewport.scroll_top() / (total - client)) * (track - thumb_len);

        let col = (cols - 1) as u16;
        let thumb = thumb_top.floor()..thumb_top.floor() + thumb_len;
        for row in 0..panel_rows {
            let glyph = if thumb.contains(&f32::from(row)) {
                "█"
            } else {
                "│"
            };
            term.print_at(col, HEADER_ROWS + row, glyph)?;
        }
        Ok(())
    }

    /// Per-depth1 summary instead of the row list.
    fn draw_groups(&self, term: &Terminal, cols: usize) -> io::Result<()> {
        let groups = self.store.grouped_by_depth1();
        term.print_at(0, HEADER_ROWS, &fit_width("그룹별 현황", cols))?;
        let panel_rows = self.list_panel_rows();
        for (index, (depth1, items)) in groups.iter().enumerate() {
            let row = index as u16 + 1;
            if row >= panel_rows {
                break;
            }
            let done = items
                .iter()
                .filter(|item| item.status == Status::Done)
                .count();
            let line = format!("  {depth1}  {done}/{}", items.len());
            term.print_at(0, HEADER_ROWS + row, &fit_width(&line, cols))?;
        }
        Ok(())
    }

    fn draw_page(&self, term: &Terminal, cols: usize) -> io::Result<()> {
        let lines: &[&str] = match self.route {
            Route::GuideRule => &[
                "코딩 컨벤션 및 네이밍 규칙 가이드.",
                "클래스 네이밍은 BEM, 파일 네이밍은 스네이크 케이스를 따른다.",
            ],
            Route::GuideTerm => &[
                "서비스 용어 정리.",
                "화면 용어와 개발 용어의 대응 관계를 기술한다.",
            ],
            Route::ExampleAgree => &["약관 동의 폼 마크업 예시."],
            Route::ExampleButton => &["버튼 상태별 마크업 예시."],
            Route::ExampleCheckbox => &["체크박스 마크업 예시."],
            Route::PublishStatus => &[],
        };
        term.print_at(0, 1, &fit_width(self.route.title(), cols))?;
        term.print_at(0, 2, &"─".repeat(cols))?;
        for (index, line) in lines.iter().enumerate() {
            term.print_at(0, 4 + index as u16, &fit_width(line, cols))?;
        }
        Ok(())
    }

    fn draw_footer(&self, term: &Terminal, cols: usize) -> io::Result<()> {
        if self.term_size.rows == 0 {
            return Ok(());
        }
        let help = if self.keyword_entry {
            "type to search  enter/esc: done"
        } else if self.route == Route::PublishStatus {
            "wheel/arrows: scroll  /: search  s c 1 d: filters  g: groups  x: clear  r: reload  tab: pages  q: quit"
        } else {
            "tab: pages  q: quit"
        };
        term.print_at(0, self.term_size.rows - 1, &fit_width(help, cols))
    }
}

fn format_row(item: &PublishItem) -> String {
    let path = [
        item.depth1.as_str(),
        item.depth2.as_str(),
        item.depth3.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" > ");
    let design = if item.has_design { "D" } else { " " };
    format!(
        "{} {} {} {}  {}/{}  {} ~ {}",
        fit_width(item.status.label(), 6),
        fit_width(&item.kind, 4),
        design,
        fit_width(&path, 42),
        item.folder,
        item.file,
        item.start_date,
        item.end_date,
    )
}

/// Truncate `text` to `width` terminal columns, then pad with spaces.
/// Width is display width: wide (CJK) characters count as two columns.
fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}
