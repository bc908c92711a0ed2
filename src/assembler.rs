use crate::ast::{AnnotatedBlock, DirectiveRecord};
use crate::error::MalformedTypedefError;
use crate::parser::{
    decode_field, decode_group, decode_media_types, decode_returns, decode_route, decode_typedef,
};
use crate::resolver::{resolve_schema, resolve_type};
use crate::spec::{Operation, Parameter, RouteDirective, SpecFragment, TagGroup};
use log::{debug, trace};

/// Where the assembler is within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyState {
    /// No `@route` seen yet. Operation-level directives are dropped here.
    AwaitingRoute,
    /// Directives attach to the operation opened by this route.
    InRoute(RouteDirective),
}

/// Running fold over one block's directives.
///
/// Parameters are collected regardless of state; they and the responses are
/// attached to every opened operation when the fold finishes.
#[derive(Debug)]
pub struct Assembly<'a> {
    block: &'a AnnotatedBlock,
    group: TagGroup,
    state: AssemblyState,
    parameters: Vec<Parameter>,
    fragment: SpecFragment,
}

impl<'a> Assembly<'a> {
    pub fn new(block: &'a AnnotatedBlock) -> Self {
        Self {
            block,
            group: decode_group(&block.directives),
            state: AssemblyState::AwaitingRoute,
            parameters: Vec::new(),
            fragment: SpecFragment::default(),
        }
    }

    pub fn state(&self) -> &AssemblyState {
        &self.state
    }

    pub fn step(mut self, directive: &DirectiveRecord) -> Self {
        match directive.title.as_str() {
            "route" => self.open_route(decode_route(&directive.description)),
            "param" => self.parameters.push(decode_parameter(directive)),
            "operationId" | "summary" | "produces" | "consumes" => self.set_field(directive),
            _ => {}
        }
        self
    }

    pub fn finish(mut self) -> SpecFragment {
        if matches!(self.state, AssemblyState::InRoute(_)) {
            let responses = decode_returns(&self.block.directives);
            for operation in self.fragment.paths.values_mut().flat_map(|m| m.values_mut()) {
                operation.parameters = self.parameters.clone();
                operation.responses = responses.clone();
            }
        }
        self.fragment
    }

    fn open_route(&mut self, route: RouteDirective) {
        trace!("route {} {}", route.method, route.uri);
        let operation = self
            .fragment
            .paths
            .entry(route.uri.clone())
            .or_default()
            .entry(route.method.clone())
            .or_default();
        operation.parameters.clear();
        operation.description = self.block.description.clone();
        operation.tags = vec![self.group.name.clone()];
        self.fragment.tags.push(self.group.clone());
        self.state = AssemblyState::InRoute(route);
    }

    fn set_field(&mut self, directive: &DirectiveRecord) {
        let AssemblyState::InRoute(route) = &self.state else {
            debug!(
                "dropping @{} `{}`: it precedes the block's @route",
                directive.title, directive.description
            );
            return;
        };
        let Some(operation) = operation_mut(&mut self.fragment, route) else {
            return;
        };

        let value = directive.description.clone();
        match directive.title.as_str() {
            "operationId" => operation.operation_id = Some(value),
            "summary" => operation.summary = Some(value),
            "produces" => operation.produces = Some(decode_media_types(&value)),
            "consumes" => operation.consumes = Some(decode_media_types(&value)),
            _ => {}
        }
    }
}

fn operation_mut<'f>(fragment: &'f mut SpecFragment, route: &RouteDirective) -> Option<&'f mut Operation> {
    fragment.paths.get_mut(&route.uri)?.get_mut(&route.method)
}

fn decode_parameter(directive: &DirectiveRecord) -> Parameter {
    let field = decode_field(&directive.name);
    Parameter {
        name: field.name,
        location: field.location,
        description: directive.description.clone(),
        required: field.required,
        type_name: resolve_type(directive.type_token.as_ref()),
        schema: resolve_schema(directive.type_token.as_ref()),
    }
}

/// Folds one annotation block into a fragment.
///
/// A block whose first directive is `typedef` yields only that definition;
/// every other directive in it is ignored.
pub fn assemble_fragment(block: &AnnotatedBlock) -> Result<SpecFragment, MalformedTypedefError> {
    if block
        .directives
        .first()
        .is_some_and(|d| d.title == "typedef")
    {
        let typedef = decode_typedef(&block.directives)?;
        trace!("typedef {}", typedef.type_name);
        return Ok(SpecFragment::from_typedef(typedef));
    }

    Ok(block
        .directives
        .iter()
        .fold(Assembly::new(block), Assembly::step)
        .finish())
}
