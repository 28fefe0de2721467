//! Utterance intent classification.
//!
//! Classification is ordered substring matching against fixed phrase sets;
//! the first set containing a match wins. The sets carry both the Chinese
//! phrases users actually say and English equivalents. Unmatched utterances
//! are not an error, they fall through to assistant forwarding.

/// Local intents recognized from a transcribed utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move forward one sub-step
    NextStep,
    /// Move back one sub-step
    PrevStep,
    /// User confirms the current action is done
    Confirmation,
    /// User wants the current instruction repeated
    Repeat,
    /// User asks what to use instead of an ingredient
    Substitution,
    /// User asks about timing or duration
    TimeQuestion,
    /// User does not understand the current instruction
    Confusion,
}

const BLOCKED_PHRASES: &[&str] = &[
    "damn", "shit", "fuck", "stupid", "idiot", "笨蛋", "傻", "蠢", "滚", "妈的", "他妈",
];

const NEXT_PHRASES: &[&str] = &[
    "下一步",
    "继续",
    "往下",
    "下一个",
    "接着来",
    "然后呢",
    "接下来",
    "next step",
    "continue",
    "go on",
    "keep going",
    "what's next",
];

const PREV_PHRASES: &[&str] = &[
    "上一步",
    "返回",
    "回去",
    "上一个",
    "刚才",
    "之前",
    "退回",
    "previous step",
    "go back",
    "last step",
    "just now",
];

const CONFIRMATION_PHRASES: &[&str] = &[
    "好了",
    "完成了",
    "做好了",
    "弄好了",
    "切好了",
    "i'm done",
    "all done",
    "finished that",
];

const REPEAT_PHRASES: &[&str] = &[
    "再说一遍",
    "重复",
    "没听清",
    "再讲一次",
    "say that again",
    "repeat that",
    "one more time",
];

const SUBSTITUTION_PHRASES: &[&str] = &[
    "代替",
    "替换",
    "换成",
    "没有这个",
    "可以用什么",
    "substitute",
    "instead of",
    "replace it with",
    "don't have",
];

const TIME_PHRASES: &[&str] = &[
    "多久",
    "多长时间",
    "几分钟",
    "什么时候好",
    "how long",
    "how many minutes",
    "when is it done",
];

const CONFUSION_PHRASES: &[&str] = &[
    "什么意思",
    "怎么做",
    "不明白",
    "不懂",
    "听不懂",
    "what do you mean",
    "i don't understand",
    "how do i do",
    "confused",
];

/// Whether the utterance hits the profanity block-list.
pub fn is_blocked(utterance: &str) -> bool {
    matches_any(utterance, BLOCKED_PHRASES)
}

/// Classify an utterance, first matching phrase set wins.
pub fn classify(utterance: &str) -> Option<Intent> {
    // Order matters: navigation intents beat the conversational ones so that
    // "继续" always moves the session rather than chatting.
    const ORDERED_SETS: &[(&[&str], Intent)] = &[
        (NEXT_PHRASES, Intent::NextStep),
        (PREV_PHRASES, Intent::PrevStep),
        (CONFIRMATION_PHRASES, Intent::Confirmation),
        (REPEAT_PHRASES, Intent::Repeat),
        (SUBSTITUTION_PHRASES, Intent::Substitution),
        (TIME_PHRASES, Intent::TimeQuestion),
        (CONFUSION_PHRASES, Intent::Confusion),
    ];

    ORDERED_SETS
        .iter()
        .find(|(phrases, _)| matches_any(utterance, phrases))
        .map(|&(_, intent)| intent)
}

fn matches_any(utterance: &str, phrases: &[&str]) -> bool {
    let lowered = utterance.to_lowercase();
    phrases.iter().any(|phrase| lowered.contains(phrase))
}
