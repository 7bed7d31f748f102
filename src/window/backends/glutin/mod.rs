mod types;
mod visitor;

use crate::errors::*;

use super::super::WindowParams;
use super::Visitor;

pub fn new(params: WindowParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::visitor::GlutinVisitor::from(params)?;
    Ok(Box::new(visitor))
}
