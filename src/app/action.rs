/// Store mutations and lifecycle requests produced by the input handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddExpense { description: String, amount: String, category: String },
    RemoveExpense { id: String },
    Quit,
}
