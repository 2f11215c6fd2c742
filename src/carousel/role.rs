//! Card roles: the class names the stylesheet positions cards by.

use std::fmt;

use super::viewport::VisibleClass;

/// Semantic position of a card relative to the centred one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Center,
    Left1,
    Left2,
    Right1,
    Right2,
    Hidden,
}

impl Role {
    /// Every role, in the order their classes are stripped from a card.
    pub const ALL: [Role; 6] = [
        Role::Center,
        Role::Left1,
        Role::Left2,
        Role::Right1,
        Role::Right2,
        Role::Hidden,
    ];

    /// The CSS class carrying this role.
    pub fn class_name(self) -> &'static str {
        match self {
            Role::Center => "center",
            Role::Left1 => "left-1",
            Role::Left2 => "left-2",
            Role::Right1 => "right-1",
            Role::Right2 => "right-2",
            Role::Hidden => "hidden",
        }
    }

    /// Inverse of [`class_name`](Self::class_name).
    pub fn from_class(class: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.class_name() == class)
    }

    /// Role of a card at forward cyclic distance `offset` from the current
    /// index, among `count` cards, for the given visible class.
    ///
    /// Rules are evaluated top to bottom; the first match wins, so with very
    /// few cards `right-*` takes precedence over `left-*`.
    pub fn for_offset(offset: usize, count: usize, visible: VisibleClass) -> Role {
        if offset == 0 {
            return Role::Center;
        }
        let visible = visible.count();
        if visible >= 4 {
            if offset == 1 {
                return Role::Right1;
            }
            if offset == 2 {
                return Role::Right2;
            }
            if offset + 1 == count {
                return Role::Left1;
            }
            if offset + 2 == count {
                return Role::Left2;
            }
        } else if visible >= 2 {
            if offset == 1 {
                return Role::Right1;
            }
            if offset + 1 == count {
                return Role::Left1;
            }
        }
        Role::Hidden
    }

    /// Whether the role is shown at all.
    pub fn is_visible(self) -> bool {
        self != Role::Hidden
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Roles for every card position given the current index.
pub fn assign_roles(current: usize, count: usize, visible: VisibleClass) -> Vec<Role> {
    (0..count)
        .map(|position| {
            let offset = (position + count - current % count.max(1)) % count;
            Role::for_offset(offset, count, visible)
        })
        .collect()
}
