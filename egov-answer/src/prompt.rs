//! Generation prompt assembly.
//!
//! The prompt carries the system instruction, a bounded window of
//! conversation history, the grounding DỮ LIỆU block, and the question.
//! Pure function; the generation service sees nothing else.

use egov_core::models::ConversationTurn;

const SYSTEM_INSTRUCTION: &str = "Bạn là trợ lý eGov-Bot chuyên về dịch vụ công Việt Nam. \
Trả lời tiếng Việt, chính xác, dựa TRỌN VẸN vào DỮ LIỆU được cung cấp (nếu có). \
Luôn đính kèm các Nguồn (đường link) xuất hiện trong dữ liệu ở cuối.\n\
Nếu KHÔNG tìm thấy thông tin rõ ràng trong DỮ LIỆU, trả lời: \"Mình chưa có thông tin về chủ đề này. \
Bạn hãy ghi rõ tên Thủ tục để mình tìm chính xác hơn. Hoặc bạn có thể tham khảo thêm tại: \
[Cổng dịch vụ công quốc gia](https://dichvucong.gov.vn/p/home/dvc-trang-chu.html)\".";

/// Build the full prompt for one question.
///
/// Only the last `history_window` turns are rendered, `role: content`
/// per line, so long sessions cannot crowd out the grounding data.
pub fn build_prompt(
    history: &[ConversationTurn],
    context: &str,
    question: &str,
    history_window: usize,
) -> String {
    let start = history.len().saturating_sub(history_window);
    let history_lines: Vec<String> = history[start..]
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content))
        .collect();

    format!(
        "{SYSTEM_INSTRUCTION}\n\
         Lịch sử trò chuyện:\n{}\n\
         DỮ LIỆU (nếu có):\n---\n{}\n---\n\
         CÂU HỎI: {}\n\
         TRẢ LỜI (rõ ràng, ngắn gọn, nếu cần liệt kê thành phần/điểm, hãy dùng bullets):",
        history_lines.join("\n"),
        context,
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egov_core::models::{ContextSnapshot, ConversationTurn};

    #[test]
    fn prompt_contains_context_and_question() {
        let prompt = build_prompt(&[], "Tên thủ tục:\nCấp thẻ CCCD", "cần gì?", 10);
        assert!(prompt.contains("DỮ LIỆU (nếu có):\n---\nTên thủ tục:\nCấp thẻ CCCD\n---"));
        assert!(prompt.contains("CÂU HỎI: cần gì?"));
    }

    #[test]
    fn history_is_windowed_to_the_most_recent_turns() {
        let history: Vec<ConversationTurn> = (0..6)
            .map(|i| ConversationTurn::user(format!("q{i}")))
            .collect();
        let prompt = build_prompt(&history, "", "tiếp theo", 3);
        assert!(!prompt.contains("user: q2"));
        assert!(prompt.contains("user: q3"));
        assert!(prompt.contains("user: q5"));
    }

    #[test]
    fn roles_are_rendered_per_line() {
        let history = vec![
            ConversationTurn::user("hỏi"),
            ConversationTurn::assistant("đáp", ContextSnapshot::empty()),
        ];
        let prompt = build_prompt(&history, "", "q", 10);
        assert!(prompt.contains("user: hỏi\nassistant: đáp"));
    }

    #[test]
    fn empty_context_keeps_the_data_block_delimiters() {
        let prompt = build_prompt(&[], "", "q", 10);
        assert!(prompt.contains("DỮ LIỆU (nếu có):\n---\n\n---"));
    }
}
