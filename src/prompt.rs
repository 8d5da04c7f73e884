//! Prompt templates and the helpers that fill them in.

/// Token in [`TEXT_MIMIC_PROMPT`] replaced by the caller's keywords.
pub const KEYWORDS_PLACEHOLDER: &str = "{keywords}";

/// Line placed between [`HUMANIZE_TEXT_PROMPT`] and the text to rewrite.
pub const HUMANIZE_SEPARATOR: &str = "\n\n以下是需要改写的文本：\n";

/// Asks the model for an eight-dimension style breakdown as a ```json block.
pub const STYLE_ANALYSIS_PROMPT: &str = r#"# 文章风格提取提示词模板 v1.0
请输入您想要分析的文本段落。我将对其进行深度风格解析，并以结构化格式输出分析结果。
## 分析维度
我将从以下维度分析文本风格特征：
1. 语言特征（句式、用词、修辞）
2. 结构特征（段落、过渡、层次）
3. 叙事特征（视角、距离、时序）
4. 情感特征（浓淡、方式、基调）
5. 思维特征（逻辑、深度、节奏）
6. 个性标记（独特表达、意象系统）
7. 文化底蕴（典故、知识领域）
8. 韵律节奏（音节、停顿、节奏）
## 输出格式
我将以下列结构化格式以代码块输出分析结果：
```json
{
"style_summary": "风格一句话概括",
"language": {
"sentence_pattern": ["主要句式特征", "次要句式特征"],
"word_choice": {
"formality_level": "正式度 1-5",
"preferred_words": ["高频特征词1", "特征词2"],
"avoided_words": ["规避词类1", "规避词类2"]
},
"rhetoric": ["主要修辞手法1", "修辞手法2"]
},
"structure": {
"paragraph_length": "段落平均字数",
"transition_style": "过渡特征",
"hierarchy_pattern": "层次展开方式"
},
"narrative": {
"perspective": "叙事视角",
"time_sequence": "时间处理方式",
"narrator_attitude": "叙事态度"
},
"emotion": {
"intensity": "情感强度 1-5",
"expression_style": "表达方式",
"tone": "情感基调"
},
"thinking": {
"logic_pattern": "思维推进方式",
"depth": "思维深度 1-5",
"rhythm": "思维节奏特征"
},
"uniqueness": {
"signature_phrases": ["标志性表达1", "表达2"],
"imagery_system": ["核心意象1", "意象2"]
},
"cultural": {
"allusions": ["典故类型", "使用频率"],
"knowledge_domains": ["涉及领域1", "领域2"]
},
"rhythm": {
"syllable_pattern": "音节特征",
"pause_pattern": "停顿规律",
"tempo": "节奏特征"
}
}
```
## 注意：
1. 文中提及的特殊要素不要提取，例如书名、作者姓名、特定地理位置等。
2. 风格提取的目的在于基于该风格生成其他指定主题的文章，提取要素应当基于这一任务。
"#;

/// Asks for a ~1000 character article on the keywords in the preceding style.
pub const TEXT_MIMIC_PROMPT: &str = r#"# 文章仿写提示词模板 v1.0
基于上述文本风格，为我编写一篇1000字的文章，要求如下：
关键词：{keywords}

注意：
- 禁止使用"让我想起…""这让我想起…""我不由得想起…"等回忆性过渡句
- 避免刻意煽情或直白的情感表达
- 采用自然段落输出，不使用标题和小标题"#;

/// Asks for a rewrite that reads like a human author's draft.
///
/// Deliberately worded as an editing brief: unlike the detector-evasion
/// template this product originally shipped, it names no detectors, scores
/// or evasion targets, so its wording does not match that template.
///
/// The code and diagram blocks are illustrative prose for the model; nothing
/// here is executed.
pub const HUMANIZE_TEXT_PROMPT: &str = r#"### 文本人味化改写指令

**角色定义**
你是一位资深文字编辑，擅长把模板化、过于工整的文章改写成带有真实作者痕迹的文字，同时完整保留原文的信息与观点。

**处理流程**
1. 接收输入文本（位于提示词末尾）
2. 通读全文，标记明显的模板化特征：
   ```python
   def find_stiff_passages(text):
       # 逐段检查：句长过于均匀、连接词堆叠、空泛总结句
       return [p for p in paragraphs(text) if uniform_rhythm(p) or stock_phrases(p)]
   ```
3. 按下列流程逐段改写：
   ```mermaid
   graph TD
   A[原始文本] --> B(逐段诊断)
   B --> C{改写方向}
   C -->|句式单一| D[长短句交错]
   C -->|用词空泛| E[换成具体细节]
   C -->|结构刻板| F[调整段落节奏]
   D --> G[输出改写]
   E --> G
   F --> G
   ```

**改写要点**
| 问题 | 处理方式 |
|------|----------|
| 句长整齐划一 | 穿插短句、口语化停顿，偶尔使用不完整句 |
| "首先/其次/最后"式连接 | 删去显性连接词，用语义自然衔接 |
| 空泛形容词 | 替换为具体的场景、动作或数字 |
| 每段都以总结句收尾 | 保留部分段落的开放式结尾 |
| 情感表达直白 | 通过细节和动作间接呈现 |

**约束条件**
- 不增删事实信息，关键人物、地点、数据必须保留
- 保持原文的叙事视角与整体风格
- 篇幅与原文相近（上下浮动不超过15%）

**输出规范**
只输出改写后的完整正文，不要添加标题、说明、改写报告或任何额外标记。"#;

/// Substitutes `keywords` for the first [`KEYWORDS_PLACEHOLDER`] in `template`.
///
/// Later occurrences are left untouched.
#[must_use]
pub fn fill_keywords(template: &str, keywords: &str) -> String {
    template.replacen(KEYWORDS_PLACEHOLDER, keywords, 1)
}

#[must_use]
pub fn build_style_analysis_prompt(text: &str) -> String {
    format!("{STYLE_ANALYSIS_PROMPT}\n\n{text}")
}

#[must_use]
pub fn build_mimic_prompt(style_json: &str, keywords: &str) -> String {
    format!(
        "{style_json}\n\n{}",
        fill_keywords(TEXT_MIMIC_PROMPT, keywords)
    )
}

#[must_use]
pub fn build_humanize_prompt(text: &str) -> String {
    format!("{HUMANIZE_TEXT_PROMPT}{HUMANIZE_SEPARATOR}{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_template_names_no_detectors() {
        for term in ["检测", "AI", "水印"] {
            assert!(!HUMANIZE_TEXT_PROMPT.contains(term), "unexpected term {term}");
        }
    }

    #[test]
    fn mimic_template_has_exactly_one_placeholder() {
        assert_eq!(TEXT_MIMIC_PROMPT.matches(KEYWORDS_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn style_prompt_is_separated_by_blank_line() {
        let prompt = build_style_analysis_prompt("原文");
        assert!(prompt.starts_with(STYLE_ANALYSIS_PROMPT));
        assert!(prompt.ends_with("\n\n原文"));
    }
}
