//! Command generation for shop NPC dialogs.
//!
//! The two generators are pure functions from a [`TransactionSpec`] to a
//! [`CommandSet`] of six Bedrock console commands. All fields are substituted
//! verbatim into fixed templates; no escaping or validation happens here.

use chrono::{DateTime, Utc};

/// Trailing formatting-reset marker appended to every chat message.
const RESET: &str = "§r";

/// Sound cue for a qualifying actor.
const SOUND_YES: &str = "mob.villager.yes";
/// Sound cue for a disqualified actor.
const SOUND_NO: &str = "mob.villager.no";

/// Parameters for one shop transaction, read from a submitted form.
///
/// The purchase generator reads `price` as the scoreboard threshold and
/// deduction and `quantity` as the granted amount. The sale generator reads
/// `quantity` as the required (and removed) holding amount and `price` as the
/// scoreboard reward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSpec {
    pub item: String,
    pub quantity: i64,
    pub price: i64,
    pub scoreboard: String,
    pub success_message: String,
    pub error_message: String,
}

/// The ordered six-line output of one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSet {
    /// Generated commands, execution-order significant.
    pub commands: Vec<String>,
    /// When this set was generated.
    pub generated_at: DateTime<Utc>,
}

impl CommandSet {
    fn new(commands: Vec<String>) -> Self {
        Self {
            commands,
            generated_at: Utc::now(),
        }
    }

    /// All commands joined by a single newline, no trailing newline.
    pub fn joined(&self) -> String {
        self.commands.join("\n")
    }
}

/// Build the purchase command set: pay a scoreboard value, receive an item.
///
/// The qualifying selector matches scores in `[price, +inf)`; the
/// disqualifying selector matches `(-inf, price - 1]`. With `price = 0` the
/// disqualifying upper bound is `-1`, a range no non-negative score satisfies.
/// That is the intended output and is not clamped.
pub fn generate_purchase_commands(spec: &TransactionSpec) -> CommandSet {
    let can_pay = format!(
        "@initiator[scores={{{}={}..}}]",
        spec.scoreboard, spec.price
    );
    let cannot_pay = format!(
        "@initiator[scores={{{}=..{}}}]",
        spec.scoreboard,
        spec.price - 1
    );

    CommandSet::new(vec![
        format!("/give {} {} {}", can_pay, spec.item, spec.quantity),
        tellraw(&can_pay, &spec.success_message),
        tellraw(&cannot_pay, &spec.error_message),
        format!("/playsound {SOUND_YES} {can_pay}"),
        format!("/playsound {SOUND_NO} {cannot_pay}"),
        format!(
            "/scoreboard players remove {} {} {}",
            can_pay, spec.scoreboard, spec.price
        ),
    ])
}

/// Build the sale command set: surrender an item, receive a scoreboard value.
///
/// The qualifying selector matches actors holding at least `quantity` of the
/// item. The trailing `0` in the `/clear` line is the data value (no
/// stack-size limit). The `quantity = 0` edge behaves like `price = 0` in
/// [`generate_purchase_commands`].
pub fn generate_sale_commands(spec: &TransactionSpec) -> CommandSet {
    let has_item = format!(
        "@initiator[hasitem={{item={},quantity={}..}}]",
        spec.item, spec.quantity
    );
    let lacks_item = format!(
        "@initiator[hasitem={{item={},quantity=..{}}}]",
        spec.item,
        spec.quantity - 1
    );

    CommandSet::new(vec![
        tellraw(&has_item, &spec.success_message),
        format!("/playsound {SOUND_YES} {has_item}"),
        tellraw(&lacks_item, &spec.error_message),
        format!("/playsound {SOUND_NO} {lacks_item}"),
        format!(
            "/scoreboard players add {} {} {}",
            has_item, spec.scoreboard, spec.price
        ),
        format!("/clear {} {} 0 {}", has_item, spec.item, spec.quantity),
    ])
}

/// Chat message to the selected actor, reset marker appended.
///
/// The message is substituted verbatim; quoting is the user's responsibility.
fn tellraw(selector: &str, message: &str) -> String {
    format!(r#"/tellraw {selector} {{"rawtext":[{{"text":"{message}{RESET}"}}]}}"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase_spec() -> TransactionSpec {
        TransactionSpec {
            item: "diamond_sword".to_string(),
            quantity: 1,
            price: 10,
            scoreboard: "coins".to_string(),
            success_message: "Thanks!".to_string(),
            error_message: "Not enough coins".to_string(),
        }
    }

    fn sale_spec() -> TransactionSpec {
        TransactionSpec {
            item: "emerald".to_string(),
            quantity: 5,
            price: 20,
            scoreboard: "coins".to_string(),
            success_message: "Sold!".to_string(),
            error_message: "Not enough emeralds".to_string(),
        }
    }

    #[test]
    fn test_purchase_full_set() {
        let set = generate_purchase_commands(&purchase_spec());
        assert_eq!(
            set.commands,
            vec![
                "/give @initiator[scores={coins=10..}] diamond_sword 1",
                r#"/tellraw @initiator[scores={coins=10..}] {"rawtext":[{"text":"Thanks!§r"}]}"#,
                r#"/tellraw @initiator[scores={coins=..9}] {"rawtext":[{"text":"Not enough coins§r"}]}"#,
                "/playsound mob.villager.yes @initiator[scores={coins=10..}]",
                "/playsound mob.villager.no @initiator[scores={coins=..9}]",
                "/scoreboard players remove @initiator[scores={coins=10..}] coins 10",
            ]
        );
    }

    #[test]
    fn test_sale_full_set() {
        let set = generate_sale_commands(&sale_spec());
        assert_eq!(set.commands.len(), 6);
        assert_eq!(
            set.commands[0],
            r#"/tellraw @initiator[hasitem={item=emerald,quantity=5..}] {"rawtext":[{"text":"Sold!§r"}]}"#
        );
        assert_eq!(
            set.commands[1],
            "/playsound mob.villager.yes @initiator[hasitem={item=emerald,quantity=5..}]"
        );
        assert_eq!(
            set.commands[2],
            r#"/tellraw @initiator[hasitem={item=emerald,quantity=..4}] {"rawtext":[{"text":"Not enough emeralds§r"}]}"#
        );
        assert_eq!(
            set.commands[3],
            "/playsound mob.villager.no @initiator[hasitem={item=emerald,quantity=..4}]"
        );
        assert_eq!(
            set.commands[4],
            "/scoreboard players add @initiator[hasitem={item=emerald,quantity=5..}] coins 20"
        );
        assert_eq!(
            set.commands[5],
            "/clear @initiator[hasitem={item=emerald,quantity=5..}] emerald 0 5"
        );
    }

    #[test]
    fn test_purchase_zero_price_boundary() {
        let spec = TransactionSpec {
            price: 0,
            ..purchase_spec()
        };
        let set = generate_purchase_commands(&spec);
        // Unsatisfiable disqualifying range, kept as-is.
        assert!(set.commands[2].contains("scores={coins=..-1}"));
        assert!(set.commands[4].contains("scores={coins=..-1}"));
        assert!(set.commands[0].contains("scores={coins=0..}"));
    }

    #[test]
    fn test_sale_zero_quantity_boundary() {
        let spec = TransactionSpec {
            quantity: 0,
            ..sale_spec()
        };
        let set = generate_sale_commands(&spec);
        assert!(set.commands[2].contains("quantity=..-1}"));
        assert!(set.commands[0].contains("quantity=0..}"));
        assert_eq!(
            set.commands[5],
            "/clear @initiator[hasitem={item=emerald,quantity=0..}] emerald 0 0"
        );
    }

    #[test]
    fn test_messages_substituted_verbatim() {
        let spec = TransactionSpec {
            success_message: r#"§a"Deal"§r done"#.to_string(),
            ..purchase_spec()
        };
        let set = generate_purchase_commands(&spec);
        // No escaping is applied, markup and quotes pass straight through.
        assert_eq!(
            set.commands[1],
            r#"/tellraw @initiator[scores={coins=10..}] {"rawtext":[{"text":"§a"Deal"§r done§r"}]}"#
        );
    }

    #[test]
    fn test_idempotent_output() {
        let spec = sale_spec();
        assert_eq!(
            generate_sale_commands(&spec).commands,
            generate_sale_commands(&spec).commands
        );
        assert_eq!(
            generate_purchase_commands(&purchase_spec()).commands,
            generate_purchase_commands(&purchase_spec()).commands
        );
    }

    #[test]
    fn test_joined_single_newlines() {
        let set = generate_purchase_commands(&purchase_spec());
        let joined = set.joined();
        assert_eq!(joined.lines().count(), 6);
        assert!(!joined.ends_with('\n'));
        assert_eq!(joined.matches('\n').count(), 5);
    }
}
