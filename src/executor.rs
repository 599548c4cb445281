//! 执行端接口：本 crate 只产出语句文本，不包含任何连接实现。

use crate::error::StatementError;
use crate::statement::Statement;

/// 接收完整语句文本并执行。语句里的值都已内联编码，执行端不做参数绑定。
pub trait Executor {
    type Rows;
    type Error;

    fn execute(&mut self, statement: &str) -> Result<Self::Rows, Self::Error>;
}

/// 渲染或执行失败。
#[derive(Debug, thiserror::Error)]
pub enum RunError<E> {
    #[error(transparent)]
    Statement(#[from] StatementError),
    #[error("statement execution failed: {0}")]
    Execute(E),
}

/// 能渲染成语句文本的对象。
pub trait Executable {
    fn to_statement(&self) -> Result<String, StatementError>;

    fn run_on<X: Executor>(&self, executor: &mut X) -> Result<X::Rows, RunError<X::Error>> {
        let statement = self.to_statement()?;
        log::debug!("executing statement: {statement}");
        executor.execute(&statement).map_err(RunError::Execute)
    }
}

impl Executable for Statement {
    fn to_statement(&self) -> Result<String, StatementError> {
        self.build()
    }
}

impl Executable for str {
    fn to_statement(&self) -> Result<String, StatementError> {
        Ok(self.to_string())
    }
}

impl Executable for String {
    fn to_statement(&self) -> Result<String, StatementError> {
        Ok(self.clone())
    }
}
