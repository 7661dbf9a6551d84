#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(String),
    TaskReactivated(String),
    TaskUpdated(String),
    TaskDeleted,
    TaskNotFoundWithId(i64),
    EmptyTaskText,
    NoChangesDetected,
    NoTasksFound,
    TasksHeader,
    ActiveCount(usize),
    EditingTask(String),
    ConfirmDeleteTask(String),

    // === STORAGE MESSAGES ===
    SlotReadFailed(String),
    SlotWriteFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDisplay,

    // === EXPORT MESSAGES ===
    ExportingTasks(String), // format
    ExportCompleted(String), // path
    NoTasksToExport,

    // === PROMPTS ===
    PromptTaskText,
    PromptSelectModules,
    PromptDefaultFilter,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
